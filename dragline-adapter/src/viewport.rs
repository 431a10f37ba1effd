use dragline::ScrollViewport;

/// A scroll viewport model: an offset clamped to `[0, content_extent - extent]`.
///
/// `smooth_scroll_by` applies immediately. Callback requests are latched until the adapter
/// takes them with [`Self::take_callback_request`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollModel {
    offset: i32,
    extent: i32,
    content_extent: i32,
    callback_requested: bool,
}

impl ScrollModel {
    pub fn new(extent: i32, content_extent: i32) -> Self {
        Self {
            offset: 0,
            extent,
            content_extent,
            callback_requested: false,
        }
    }

    pub fn max_offset(&self) -> i32 {
        self.content_extent.saturating_sub(self.extent).max(0)
    }

    pub fn set_content_extent(&mut self, content_extent: i32) {
        self.content_extent = content_extent;
        self.offset = self.offset.clamp(0, self.max_offset());
    }

    pub fn scroll_to(&mut self, offset: i32) {
        self.offset = offset.clamp(0, self.max_offset());
    }

    pub fn take_callback_request(&mut self) -> bool {
        core::mem::take(&mut self.callback_requested)
    }
}

impl ScrollViewport for ScrollModel {
    fn scroll_offset(&self) -> i32 {
        self.offset
    }

    fn extent(&self) -> i32 {
        self.extent
    }

    fn smooth_scroll_by(&mut self, delta: i32) {
        self.scroll_to(self.offset.saturating_add(delta));
    }

    fn request_callback(&mut self) {
        self.callback_requested = true;
    }
}
