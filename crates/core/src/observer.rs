/// Watches the events a solver emits.
///
/// Every solver in this workspace runs its full iteration budget, so an
/// observer can record or report on a run but never alter it.
///
/// Any `FnMut(&E)` closure is an observer, and `()` observes nothing.
pub trait Observer<E> {
    fn observe(&mut self, event: &E);
}

impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event);
    }
}

impl<E> Observer<E> for () {
    fn observe(&mut self, _event: &E) {}
}
