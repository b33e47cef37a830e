use ratatui::layout::Rect;

use crate::theme::Palette;
use crate::ui::UiFrame;

pub mod dock;

pub use dock::{Dock, DockAction};

pub trait Component {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, palette: &Palette);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    struct Fill;
    impl Component for Fill {
        fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _palette: &Palette) {
            let buffer = frame.buffer_mut();
            if let Some(cell) = buffer.cell_mut((area.x, area.y)) {
                cell.set_symbol("*");
            }
        }
    }

    #[test]
    fn components_render_through_ui_frame() {
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buf);
        Fill.render(&mut frame, area, &Palette::dark());
        assert_eq!(buf.cell((0, 0)).map(|c| c.symbol()), Some("*"));
    }
}
