// Snake catalogue: read endpoints are public, writes are admin-only.

pub mod handlers;
