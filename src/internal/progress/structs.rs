pub mod progress_sample;
pub mod total_size;

pub use progress_sample::ProgressSample;
pub use total_size::TotalSize;
