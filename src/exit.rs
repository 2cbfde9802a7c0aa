use crate::github::HostError;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_AUTH: i32 = 1;
pub const EXIT_NETWORK: i32 = 2;
pub const EXIT_CONFIG: i32 = 4;

/// Pick an exit code for a failed run from the first host error in the chain
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    match error.chain().find_map(|cause| cause.downcast_ref::<HostError>()) {
        Some(host_error) if host_error.is_authentication() => EXIT_AUTH,
        _ => EXIT_NETWORK,
    }
}
