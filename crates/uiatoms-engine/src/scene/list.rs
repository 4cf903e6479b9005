use super::DrawCmd;
use super::shapes::stretch_pic::StretchPicCmd;

/// A recorded call and its position in the stream.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    /// Issue index since the last [`DrawList::clear`].
    pub order: u32,
    pub cmd: DrawCmd,
}

/// Renderer calls recorded for a frame, in issue order.
///
/// Order is the only ordering there is: the engine paints in call order and
/// the override color applies to every quad until the next change.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
    }

    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem { order, cmd });
    }

    /// Number of calls that drew a quad.
    pub fn quad_count(&self) -> usize {
        self.items.iter().filter(|i| i.cmd.is_quad()).count()
    }

    /// Number of override-color changes, resets included.
    pub fn color_changes(&self) -> usize {
        self.items
            .iter()
            .filter(|i| matches!(i.cmd, DrawCmd::SetColor(_)))
            .count()
    }

    /// Stretched quads in issue order.
    pub fn stretch_pics(&self) -> impl Iterator<Item = &StretchPicCmd> {
        self.items.iter().filter_map(|i| match &i.cmd {
            DrawCmd::StretchPic(c) => Some(c),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{ColorRgba, Rect};
    use crate::trap::{ShaderHandle, UvRect};

    fn quad() -> DrawCmd {
        DrawCmd::StretchPic(StretchPicCmd::new(
            Rect::new(0.0, 0.0, 1.0, 1.0),
            UvRect::FULL,
            ShaderHandle(1),
        ))
    }

    #[test]
    fn order_follows_push() {
        let mut list = DrawList::new();
        list.push(DrawCmd::SetColor(Some(ColorRgba::white())));
        list.push(quad());
        list.push(DrawCmd::SetColor(None));

        let orders: Vec<u32> = list.items().iter().map(|i| i.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
        assert_eq!(list.quad_count(), 1);
        assert_eq!(list.color_changes(), 2);
    }

    #[test]
    fn clear_restarts_order() {
        let mut list = DrawList::new();
        list.push(quad());
        list.clear();
        assert!(list.is_empty());
        list.push(DrawCmd::UpdateScreen);
        assert_eq!(list.items()[0].order, 0);
        assert_eq!(list.quad_count(), 0);
    }
}
