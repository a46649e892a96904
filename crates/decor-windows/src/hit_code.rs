//! Translation between frame regions and Win32 `HT*` hit-test codes.

use decor_core::{CaptionButton, CursorShape, Region, ResizeEdge};
use windows::Win32::UI::WindowsAndMessaging::{
    HCURSOR, HTBOTTOM, HTBOTTOMLEFT, HTBOTTOMRIGHT, HTCAPTION, HTCLIENT, HTCLOSE, HTLEFT,
    HTMAXBUTTON, HTMINBUTTON, HTNOWHERE, HTRIGHT, HTTOP, HTTOPLEFT, HTTOPRIGHT, IDC_SIZENESW,
    IDC_SIZENS, IDC_SIZENWSE, IDC_SIZEWE, LoadCursorW,
};

/// Maps a region to its hit-test code.
///
/// Caption buttons only report native button codes when `native_buttons`
/// is set (Windows 11 snap layouts); otherwise the host draws and handles
/// them as client area.
pub(crate) fn to_code(region: Region, native_buttons: bool) -> u32 {
    match region {
        Region::None => HTNOWHERE,
        Region::Client => HTCLIENT,
        Region::Caption => HTCAPTION,
        Region::CaptionButton(_) if !native_buttons => HTCLIENT,
        Region::CaptionButton(CaptionButton::Minimize) => HTMINBUTTON,
        Region::CaptionButton(CaptionButton::Maximize) => HTMAXBUTTON,
        Region::CaptionButton(CaptionButton::Close) => HTCLOSE,
        Region::Border(edge) => edge_code(edge),
    }
}

fn edge_code(edge: ResizeEdge) -> u32 {
    match edge {
        ResizeEdge::Left => HTLEFT,
        ResizeEdge::Right => HTRIGHT,
        ResizeEdge::Top => HTTOP,
        ResizeEdge::TopLeft => HTTOPLEFT,
        ResizeEdge::TopRight => HTTOPRIGHT,
        ResizeEdge::Bottom => HTBOTTOM,
        ResizeEdge::BottomLeft => HTBOTTOMLEFT,
        ResizeEdge::BottomRight => HTBOTTOMRIGHT,
    }
}

/// Recovers the border edge a hit-test code names, if any.
pub(crate) fn edge_from_code(code: u32) -> Option<ResizeEdge> {
    ResizeEdge::ALL
        .into_iter()
        .find(|&edge| edge_code(edge) == code)
}

/// Loads the system cursor for a resize shape.
pub(crate) fn load_cursor(shape: CursorShape) -> Option<HCURSOR> {
    let id = match shape {
        CursorShape::SizeWE => IDC_SIZEWE,
        CursorShape::SizeNS => IDC_SIZENS,
        CursorShape::SizeNWSE => IDC_SIZENWSE,
        CursorShape::SizeNESW => IDC_SIZENESW,
    };
    // SAFETY: system cursors are shared resources; no module handle needed.
    unsafe { LoadCursorW(None, id) }.ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_edge_round_trips_through_its_code() {
        for edge in ResizeEdge::ALL {
            assert_eq!(edge_from_code(edge_code(edge)), Some(edge));
        }
    }

    #[test]
    fn caption_buttons_are_client_without_native_buttons() {
        let close = Region::CaptionButton(CaptionButton::Close);
        assert_eq!(to_code(close, false), HTCLIENT);
        assert_eq!(to_code(close, true), HTCLOSE);
    }

    #[test]
    fn non_frame_codes_have_no_edge() {
        assert_eq!(edge_from_code(HTCLIENT), None);
        assert_eq!(edge_from_code(HTCAPTION), None);
    }
}
