/*!
# Worker Probe

This crate provides a probe which sends a worker registration to a remote endpoint, either
`application/x-www-form-urlencoded` or `multipart/form-data`, and prints what the endpoint answers.

Building a request, sending it and reporting the result are separate steps, and sending goes
through the `Transport` trait so that the endpoint can be replaced.

## Example

```rust,no_run
use worker_probe::{report, Attachment, Probe, ProbeOptions, ProfileFields};

let probe = Probe::http(ProbeOptions::new()).unwrap();

match probe.send_multipart(ProfileFields::sample_worker(), Attachment::sample_worker()) {
    Ok(result) => report(&result),
    Err(err) => println!("Error: {}", err),
}
```

The `worker-probe` binary runs the same thing with `worker-probe form` or `worker-probe multipart`.
*/

pub extern crate mime;

mod attachment;
mod probe;
mod probe_encoding;
mod probe_errors;
mod probe_options;
mod probe_request;
mod probe_result;
mod profile_fields;
mod report;
mod setup;
mod transport;

pub use attachment::*;
pub use probe::*;
pub use probe_encoding::*;
pub use probe_errors::*;
pub use probe_options::*;
pub use probe_request::*;
pub use probe_result::*;
pub use profile_fields::*;
pub use report::*;
pub use setup::*;
pub use transport::*;
