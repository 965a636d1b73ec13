pub mod assist;
pub mod probes;
pub mod resumes;

use serde::Serialize;

/// Success envelope the form front-end unwraps: `{ "data": ... }`.
#[derive(Serialize)]
pub struct Payload<T> {
    pub data: T,
}
