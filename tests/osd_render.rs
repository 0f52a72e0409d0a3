//! OSD, subtitle and progress-bar rendering against a recording canvas.

mod common;

use common::{BLACK, CHAR_W, FakeCanvas, LINE_H, Op, WHITE};
use softvo::osd::progbar::render_progbar;
use softvo::osd::subtitle::render_subtitle;
use softvo::osd::text::{OsdStyles, render_osd_text};
use softvo::{
    Align, Canvas, FaceId, HAlign, ICON_PLAY, Palette, PixelType, ProgbarState, TextStyle, VAlign,
};

const REGULAR: FaceId = FaceId(0);
const BOLD: FaceId = FaceId(1);
const SUB: FaceId = FaceId(2);

fn styles() -> OsdStyles {
    OsdStyles {
        regular: TextStyle::new(REGULAR),
        bold: TextStyle::new(BOLD),
        subtitle: TextStyle::new(SUB),
    }
}

fn palette() -> Palette {
    Palette {
        white: WHITE,
        black: BLACK,
    }
}

fn canvas() -> FakeCanvas {
    FakeCanvas::new(200, 80, PixelType::Xrgb8888)
}

#[test]
fn plain_text_draws_shadow_then_fill() {
    let mut c = canvas();
    render_osd_text(&mut c, &styles(), palette(), b"status");

    let h = LINE_H as i32;
    assert_eq!(c.ops.len(), 2);
    assert_eq!(c.ops[0], Op::Text {
        face: REGULAR,
        x: h + 1,
        y: h + 1,
        align: Align::RIGHT_BELOW,
        fg: BLACK,
        text: "status".to_string(),
    });
    assert_eq!(c.ops[1], Op::Text {
        face: REGULAR,
        x: h,
        y: h,
        align: Align::RIGHT_BELOW,
        fg: WHITE,
        text: "status".to_string(),
    });
}

#[test]
fn tagged_text_advances_cursor_and_wraps() {
    let mut c = canvas();
    render_osd_text(&mut c, &styles(), palette(), b"\xfdAB\\NC");

    let h = LINE_H as i32;
    // "AB" shadow+fill at the line origin.
    assert_eq!(c.ops[0], Op::Text {
        face: REGULAR,
        x: h + 1,
        y: h + 1,
        align: Align::RIGHT_BELOW,
        fg: BLACK,
        text: "AB".to_string(),
    });
    // After \N the cursor resets to the line origin one line down.
    assert_eq!(c.ops[2], Op::Text {
        face: REGULAR,
        x: h + 1,
        y: 2 * h + 1,
        align: Align::RIGHT_BELOW,
        fg: BLACK,
        text: "C".to_string(),
    });
}

#[test]
fn indent_shifts_by_one_glyph_width() {
    let mut c = canvas();
    render_osd_text(&mut c, &styles(), palette(), b"\xfd\\hX");

    let h = LINE_H as i32;
    let indent = CHAR_W as i32;
    assert_eq!(c.ops[1], Op::Text {
        face: REGULAR,
        x: h + indent,
        y: h,
        align: Align::RIGHT_BELOW,
        fg: WHITE,
        text: "X".to_string(),
    });
}

#[test]
fn bold_runs_use_the_bold_face() {
    let mut c = canvas();
    render_osd_text(&mut c, &styles(), palette(), b"\xfd{\\b1}A{\\b0}B");

    let faces: Vec<FaceId> = c
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Text { face, .. } => Some(*face),
            _ => None,
        })
        .collect();
    assert_eq!(faces, vec![BOLD, BOLD, REGULAR, REGULAR]);
}

#[test]
fn consecutive_runs_advance_by_rendered_width() {
    let mut c = canvas();
    render_osd_text(&mut c, &styles(), palette(), b"\xfdAB{\\b1}CD");

    let h = LINE_H as i32;
    let advance = 2 * CHAR_W as i32;
    match &c.ops[3] {
        Op::Text { x, y, text, .. } => {
            assert_eq!((*x, *y), (h + advance, h));
            assert_eq!(text, "CD");
        }
        other => panic!("expected text op, got {other:?}"),
    }
}

#[test]
fn play_icon_renders_as_plain_glyph_run() {
    let mut c = canvas();
    render_osd_text(&mut c, &styles(), palette(), &[0xff, ICON_PLAY, b' ', b'1']);

    let h = LINE_H as i32;
    assert_eq!(c.ops[1], Op::Text {
        face: REGULAR,
        x: h,
        y: h,
        align: Align::RIGHT_BELOW,
        fg: WHITE,
        text: "> 1".to_string(),
    });
}

#[test]
fn unknown_icon_code_becomes_space() {
    let mut c = canvas();
    render_osd_text(&mut c, &styles(), palette(), &[0xff, 0x6f]);

    match &c.ops[1] {
        Op::Text { text, .. } => assert_eq!(text, " "),
        other => panic!("expected text op, got {other:?}"),
    }
}

#[test]
fn empty_osd_text_draws_nothing() {
    let mut c = canvas();
    render_osd_text(&mut c, &styles(), palette(), b"");
    assert!(c.ops.is_empty());
}

#[test]
fn single_subtitle_line_is_bottom_anchored_and_centered() {
    let mut c = canvas();
    let style = styles().subtitle;
    render_subtitle(&mut c, &style, palette(), "hello");

    let y = c.height() as i32 - LINE_H as i32;
    let x = c.width() as i32 / 2;
    assert_eq!(c.ops.len(), 2);
    assert_eq!(c.ops[1], Op::Text {
        face: SUB,
        x,
        y,
        align: Align::CENTER_ABOVE,
        fg: WHITE,
        text: "hello".to_string(),
    });
}

#[test]
fn two_subtitle_lines_stack_upward_from_the_bottom() {
    let mut c = canvas();
    let style = styles().subtitle;
    render_subtitle(&mut c, &style, palette(), "first\nsecond\nignored");

    let h = LINE_H as i32;
    let y0 = c.height() as i32 - 2 * h;
    let texts: Vec<(i32, String)> = c
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Text { y, fg, text, .. } if *fg == WHITE => Some((*y, text.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec![
        (y0, "first".to_string()),
        (y0 + h, "second".to_string())
    ]);
}

#[test]
fn subtitle_alignment_is_center_above() {
    let mut c = canvas();
    let style = styles().subtitle;
    render_subtitle(&mut c, &style, palette(), "x");
    match &c.ops[0] {
        Op::Text { align, .. } => {
            assert_eq!(align.h, HAlign::Center);
            assert_eq!(align.v, VAlign::Above);
        }
        other => panic!("expected text op, got {other:?}"),
    }
}

#[test]
fn scaled_subtitle_style_doubles_line_height() {
    let mut c = canvas();
    let style = TextStyle::with_mul(SUB, 2);
    render_subtitle(&mut c, &style, palette(), "big");

    let y = c.height() as i32 - 2 * LINE_H as i32;
    match &c.ops[1] {
        Op::Text { y: ty, .. } => assert_eq!(*ty, y),
        other => panic!("expected text op, got {other:?}"),
    }
}

fn bar_geometry(c: &FakeCanvas) -> (i32, i32, i32, i32) {
    let h = LINE_H as i32;
    let x = h;
    let y = c.height as i32 - 4 * h;
    let w = c.width as i32 - 2 * h;
    (x, y, w, h)
}

#[test]
fn hidden_progbar_draws_nothing() {
    let mut c = canvas();
    let s = styles();
    render_progbar(&mut c, &s.regular, &s.subtitle, palette(), &ProgbarState::hidden());
    assert!(c.ops.is_empty());
}

#[test]
fn progbar_draws_nested_borders_back_to_front() {
    let mut c = canvas();
    let s = styles();
    let state = ProgbarState {
        symbol: Some(ICON_PLAY),
        value: 0.0,
        stops: vec![],
    };
    render_progbar(&mut c, &s.regular, &s.subtitle, palette(), &state);

    let (x, y, w, h) = bar_geometry(&c);
    assert_eq!(c.ops[0], Op::Rect {
        x: x - 2,
        y: y - 2,
        w: w as u32 + 4,
        h: h as u32 + 4,
        color: WHITE,
    });
    assert_eq!(c.ops[1], Op::Rect {
        x: x - 1,
        y: y - 1,
        w: w as u32 + 2,
        h: h as u32 + 2,
        color: BLACK,
    });
    assert_eq!(c.ops[2], Op::Rect {
        x,
        y,
        w: w as u32,
        h: h as u32,
        color: WHITE,
    });
}

#[test]
fn progbar_value_zero_leaves_only_the_playhead() {
    let mut c = canvas();
    let s = styles();
    let state = ProgbarState {
        symbol: Some(ICON_PLAY),
        value: 0.0,
        stops: vec![],
    };
    render_progbar(&mut c, &s.regular, &s.subtitle, palette(), &state);

    let (x, y, _, h) = bar_geometry(&c);
    assert_eq!(c.ops[3], Op::FillRect {
        x,
        y,
        w: 0,
        h: h as u32,
        color: WHITE,
    });
    assert_eq!(c.ops[4], Op::Vline {
        x,
        y,
        h: h as u32,
        color: BLACK,
    });
}

#[test]
fn progbar_value_one_fills_the_interior() {
    let mut c = canvas();
    let s = styles();
    let state = ProgbarState {
        symbol: Some(ICON_PLAY),
        value: 1.0,
        stops: vec![],
    };
    render_progbar(&mut c, &s.regular, &s.subtitle, palette(), &state);

    let (x, y, w, h) = bar_geometry(&c);
    assert_eq!(c.ops[3], Op::FillRect {
        x,
        y,
        w: w as u32,
        h: h as u32,
        color: WHITE,
    });
}

#[test]
fn progbar_stop_tick_is_centered_on_its_fraction() {
    let mut c = canvas();
    let s = styles();
    let state = ProgbarState {
        symbol: Some(ICON_PLAY),
        value: 0.25,
        stops: vec![0.5],
    };
    render_progbar(&mut c, &s.regular, &s.subtitle, palette(), &state);

    let (x, y, w, h) = bar_geometry(&c);
    let stop_x = x + w / 2;
    let tail = &c.ops[c.ops.len() - 3..];
    assert_eq!(tail[0], Op::Vline {
        x: stop_x - 1,
        y,
        h: h as u32,
        color: WHITE,
    });
    assert_eq!(tail[1], Op::Vline {
        x: stop_x,
        y,
        h: h as u32,
        color: BLACK,
    });
    assert_eq!(tail[2], Op::Vline {
        x: stop_x + 1,
        y,
        h: h as u32,
        color: WHITE,
    });
}
