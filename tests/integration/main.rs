//! End-to-end HTTP tests driving the full router.

mod helpers;

mod auth_test;
mod gate_test;
mod permission_test;
mod stock_test;
