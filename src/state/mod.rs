pub mod remote;

pub use remote::{RemoteState, RemoteView};
