use crate::domain::form_spec::FormSpec;

/// Returns true if any spec in the batch names a next action kind this build
/// cannot execute, on either the confirm-response or the post-confirm side.
///
/// The answer covers the whole batch; callers wanting per-entry decisions
/// pass one spec at a time.
pub fn contains_unknown_next_actions(form_specs: &[FormSpec]) -> bool {
    form_specs.iter().any(FormSpec::has_unknown_next_actions)
}
