/// Ask the user to confirm a destructive action. Anything short of an
/// explicit "OK" (including a missing window) counts as declined.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}
