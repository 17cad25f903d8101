// Hospital directory: registration, approval and removal.
// Nearest-hospital search lives in `search`.

pub mod handlers;
