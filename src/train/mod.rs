pub mod trainer;
pub mod step_stats;
pub mod train_config;
pub mod loop_fn;

pub use trainer::train_step;
pub use step_stats::{StepStats, TrainSummary};
pub use train_config::TrainConfig;
pub use loop_fn::train_loop;
