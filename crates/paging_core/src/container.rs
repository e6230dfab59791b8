use shared::protocol::DisplayRequest;

/// The paging widget that actually shows pages.
///
/// `display` must present `request.page` and later answer once through
/// `PagingController::display_finished(request.ticket, finished)`. A newer
/// request supersedes any animation still in flight. Swipes performed by the
/// user are reported back through `will_transition` and
/// `did_finish_animating`, and neighbours are looked up with `page_before` /
/// `page_after`.
pub trait RenderingContainer<P: ?Sized> {
    fn display(&mut self, request: DisplayRequest<P>);

    /// Called when the sequence becomes empty and nothing can be shown.
    fn clear(&mut self) {}

    fn set_scroll_enabled(&mut self, enabled: bool);
}

impl<P: ?Sized, C: RenderingContainer<P> + ?Sized> RenderingContainer<P> for Box<C> {
    fn display(&mut self, request: DisplayRequest<P>) {
        (**self).display(request);
    }

    fn clear(&mut self) {
        (**self).clear();
    }

    fn set_scroll_enabled(&mut self, enabled: bool) {
        (**self).set_scroll_enabled(enabled);
    }
}
