/// Mark a request as in flight. Returns `false` when one already is, in which
/// case the caller must not start another.
///
/// Called synchronously from event handlers, before `spawn`, so a second
/// click that lands before the task first runs is already rejected.
pub(crate) fn try_begin(in_flight: &mut bool) -> bool {
    if *in_flight {
        return false;
    }
    *in_flight = true;
    true
}
