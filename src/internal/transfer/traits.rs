pub mod progress_observer;
