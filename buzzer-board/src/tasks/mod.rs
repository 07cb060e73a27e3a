pub mod feedback_task;
