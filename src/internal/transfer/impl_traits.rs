pub mod impl_progress_observer;
