mod common;

use common::{full_record, stroke_rect_count};
use instruction_sheet::model::{DrawOp, FontWeight};
use instruction_sheet::render::text::wrap_text;
use instruction_sheet::render::{PageState, render_table};
use instruction_sheet::{FIELD_ORDER, FieldKey, FieldRecord, LayoutConfig};

fn state_at(config: &LayoutConfig, y: f32) -> PageState {
    let mut state = PageState::new(&config.page);
    state.cursor_mut().move_to(y);
    state
}

#[test]
fn rows_follow_field_order() {
    let _ = env_logger::try_init();
    let config = LayoutConfig::default();
    let mut state = state_at(&config, 60.0);
    let rows = render_table(&mut state, &full_record(), &FIELD_ORDER, &config.table);

    assert_eq!(rows.len(), 16);
    assert!(rows.iter().map(|r| r.key).eq(FIELD_ORDER));
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.page_index, 0);
        assert_eq!(row.top, 70.0 + 10.0 * i as f32);
    }

    let page = &state.pages()[0];
    assert_eq!(stroke_rect_count(page), 32);

    let labels: Vec<&str> = page
        .texts()
        .filter(|t| t.weight == FontWeight::Bold && t.x == 22.0)
        .map(|t| t.text.as_str())
        .collect();
    let mut expected = vec!["Field"];
    expected.extend(FIELD_ORDER.iter().map(|k| k.label()));
    assert_eq!(labels, expected);
    assert_eq!(state.cursor().y(), 230.0);
}

#[test]
fn header_is_filled_and_drawn_once() {
    let config = LayoutConfig::default();
    let mut state = state_at(&config, 60.0);
    render_table(&mut state, &full_record(), &FIELD_ORDER, &config.table);
    let page = &state.pages()[0];

    let fills: Vec<_> = page
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::FillRect { rect, color } => Some((*rect, *color)),
            _ => None,
        })
        .collect();
    assert_eq!(fills.len(), 2);
    assert!(fills.iter().all(|(_, c)| *c == [66, 139, 202]));
    assert_eq!(fills[0].0.width, 60.0);
    assert_eq!(fills[1].0.width, 120.0);

    let header_texts: Vec<_> = page.texts().filter(|t| t.color == [255, 255, 255]).collect();
    assert_eq!(header_texts.len(), 2);
    assert_eq!(header_texts[0].text, "Field");
    assert_eq!(header_texts[1].text, "Value");
}

#[test]
fn empty_values_still_get_a_row() {
    let config = LayoutConfig::default();
    let mut state = state_at(&config, 60.0);
    let rows = render_table(&mut state, &FieldRecord::new(), &FIELD_ORDER, &config.table);
    assert_eq!(rows.len(), 16);
    assert!(rows.iter().all(|r| r.line_count == 0 && !r.overflows));
    assert_eq!(stroke_rect_count(&state.pages()[0]), 32);
}

#[test]
fn table_breaks_mid_way_without_repeating_header() {
    let config = LayoutConfig::default();
    let mut state = state_at(&config, 240.0);
    let rows = render_table(&mut state, &full_record(), &FIELD_ORDER, &config.table);

    // header 240..250, rows at 250 and 260; 270 + 10 overflows 277
    assert_eq!(rows[0].top, 250.0);
    assert_eq!(rows[1].top, 260.0);
    assert_eq!(rows[2].page_index, 1);
    assert_eq!(rows[2].top, 20.0);

    let pages = state.pages();
    assert_eq!(pages.len(), 2);
    assert!(pages[0].contains_text("Field"));
    assert!(!pages[1].contains_text("Field"));
    assert_eq!(stroke_rect_count(&pages[0]), 4);
    assert_eq!(stroke_rect_count(&pages[1]), 28);

    for row in &rows {
        assert!(row.top + 10.0 <= 277.0);
    }
}

#[test]
fn long_value_overflows_without_growing_the_row() {
    let config = LayoutConfig::default();
    let long = "Warm golden hour light across the whole frame with long shadows. ".repeat(6);
    let record = full_record().with(FieldKey::AdditionalWords, long.trim());
    let mut state = state_at(&config, 60.0);
    let rows = render_table(&mut state, &record, &FIELD_ORDER, &config.table);

    let last = rows.last().unwrap();
    assert_eq!(last.key, FieldKey::AdditionalWords);
    assert!(last.line_count > 1);
    assert!(last.overflows);
    assert_eq!(last.top, rows[14].top + 10.0);
    assert_eq!(state.cursor().y(), last.top + 10.0);
    assert!(!rows[0].overflows);
}

#[test]
fn wrapped_value_lines_fit_the_value_column() {
    let config = LayoutConfig::default();
    let width = config.table.value_text_width();
    assert_eq!(width, 116.0);

    let text = "A person walking through a crowded shopping street in the evening, \
                neon signs reflecting on wet pavement, carrying two paper bags";
    let lines = wrap_text(text, FontWeight::Regular, 10.0, width);
    assert!(lines.len() >= 2);
    for line in &lines {
        assert!(line.width <= width + 1e-3, "{} is {}mm", line.text, line.width);
    }
    let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.text.split(' ')).collect();
    let words: Vec<&str> = text.split_whitespace().collect();
    assert_eq!(rejoined, words);
}

#[test]
fn overlong_word_is_split_between_characters() {
    let word = "x".repeat(300);
    let lines = wrap_text(&word, FontWeight::Regular, 10.0, 116.0);
    assert!(lines.len() > 1);
    assert!(lines.iter().all(|l| l.width <= 116.0 + 1e-3));
    let joined: String = lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(joined, word);
}

#[test]
fn explicit_newlines_start_new_lines() {
    let lines = wrap_text("Soft smile\nHolding a cup\n\n", FontWeight::Regular, 10.0, 116.0);
    let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["Soft smile", "Holding a cup"]);
    assert!(wrap_text("   ", FontWeight::Regular, 10.0, 116.0).is_empty());
}
