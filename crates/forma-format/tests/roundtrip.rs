//! Integration tests for project file round-trips.
//!
//! These cover the full write-then-read path, sparse defaults, the
//! table-column correlation invariant, legacy (unframed) input, and
//! corruption detection.

use forma_format::{
    FormatError, MAGIC_BYTES, ReaderOptions, SectionWriter, Tag, TRAILER_LEN, UnknownTagPolicy,
    read_project, read_project_with_options, write_project,
};
use forma_model::{
    Alignment, Background, Color3, Color4, ColumnDisplay, ColumnInternal, Container,
    ContainerLink, Control, Member, MemberType, Orientation, Project, Rect, TableColumn,
    TableDefinition, TextSpec, TextStyle, TooltipSpec, Window,
};

fn roundtrip(project: &Project) -> Project {
    let bytes = write_project(project).unwrap();
    read_project(&bytes).unwrap()
}

fn full_project() -> Project {
    let mut project = Project::new("hud");
    project.directory = "designs/hud".to_string();
    project.source_path = "src/ui/hud_gen.rs".to_string();
    project.grid_size = 4;

    let mut table = TableDefinition::new("inventory");
    table.columns.push(TableColumn {
        display: ColumnDisplay::new("Item", 120, Alignment::Left),
        internal: ColumnInternal::new("item_name", MemberType::Text),
    });
    table.columns.push(TableColumn {
        display: ColumnDisplay::new("Qty", 40, Alignment::Right),
        internal: ColumnInternal::new("quantity", MemberType::Int),
    });
    table.highlight_color = Color4([0.9, 0.9, 0.2, 1.0]);
    table.divider_color = Color3([0.3, 0.3, 0.3]);
    project.tables.push(table);

    let mut main = Window::new("Main", Rect::new(0, 0, 320, 240));
    main.orientation = Orientation::Center;
    main.background = Background::BorderedTexture {
        texture: "panel".to_string(),
        alternate: Some("panel_hi".to_string()),
        border: 4,
    };
    main.color = Some(Color4([0.2, 0.4, 0.6, 1.0]));
    main.ignore_rtl = true;
    main.members.push(Member::new("gold", MemberType::Int));
    main.members.push(Member::new("title", MemberType::Text));

    let mut button = Control::new("ok_button", Rect::new(5, 5, 40, 20));
    button.background = Background::Texture {
        texture: "button".to_string(),
        alternate: None,
    };
    button.text = Some(TextSpec {
        key: "ok_label".to_string(),
        dynamic: false,
        scale: 1.25,
        color: Color4([1.0, 0.0, 0.0, 1.0]),
        align: Alignment::Center,
        style: TextStyle::Shadowed,
    });
    button.tooltip = Some(TooltipSpec {
        key: "ok_tooltip".to_string(),
        scale: 0.75,
    });
    button.left_click = true;
    button.shift_click = true;
    main.controls.push(button);

    let mut grid = Control::new("item_table", Rect::new(10, 30, 300, 180));
    grid.container = Container::Table(ContainerLink {
        child_window: "ItemRow".to_string(),
        element_type: "Item".to_string(),
    });
    grid.columns.push(TableColumn {
        display: ColumnDisplay::new("Name", 200, Alignment::Left),
        internal: ColumnInternal::new("name", MemberType::Text),
    });
    grid.columns.push(TableColumn {
        display: ColumnDisplay::new("Count", 60, Alignment::Right),
        internal: ColumnInternal::new("count", MemberType::Int),
    });
    grid.members.push(Member::new("selected", MemberType::Bool));
    grid.table_inserts.push("default_row".to_string());
    main.controls.push(grid);
    project.windows.push(main);

    let mut row = Window::new("ItemRow", Rect::new(0, 0, 300, 24));
    row.parent = Some("Main".to_string());
    row.background = Background::LegacyGfx {
        name: "gfx_row".to_string(),
    };
    project.windows.push(row);

    project
}

#[test]
fn full_roundtrip() {
    let project = full_project();
    assert_eq!(roundtrip(&project), project);
}

#[test]
fn minimal_scenario() {
    // One window, one control, left-click only.
    let mut project = Project::new(String::new());
    let mut window = Window::new("W", Rect::new(0, 0, 100, 50));
    let mut control = Control::new("B", Rect::new(5, 5, 40, 20));
    control.left_click = true;
    window.controls.push(control);
    project.windows.push(window);

    let round = roundtrip(&project);
    assert_eq!(round.windows.len(), 1);
    assert_eq!(round.windows[0].name, "W");
    assert_eq!(round.windows[0].orientation, Orientation::UpperLeft);
    assert_eq!(round.windows[0].controls.len(), 1);
    let control = &round.windows[0].controls[0];
    assert_eq!(control.name, "B");
    assert!(control.left_click);
    assert!(!control.right_click);
    assert_eq!(control.background, Background::None);
}

#[test]
fn empty_project_roundtrip() {
    let project = Project::new("empty");
    let round = roundtrip(&project);
    assert_eq!(round, project);
    assert!(round.windows.is_empty());
}

#[test]
fn all_default_text_spec_reads_back_as_absent() {
    // A text spec with every field at its default writes no tags, so it
    // is indistinguishable from no text spec at all.
    let mut project = Project::new("p");
    let mut window = Window::new("W", Rect::new(0, 0, 10, 10));
    let mut control = Control::new("C", Rect::new(0, 0, 5, 5));
    control.text = Some(TextSpec::default());
    control.tooltip = Some(TooltipSpec::default());
    window.controls.push(control);
    project.windows.push(window);

    let round = roundtrip(&project);
    assert_eq!(round.windows[0].controls[0].text, None);
    assert_eq!(round.windows[0].controls[0].tooltip, None);
}

#[test]
fn sparse_defaults_are_not_written() {
    let mut sparse = Project::new("p");
    sparse.windows.push(Window::new("W", Rect::new(0, 0, 10, 10)));

    let mut tagged = sparse.clone();
    tagged.windows[0].ignore_rtl = true;
    tagged.windows[0].color = Some(Color4([0.5, 0.5, 0.5, 1.0]));

    let sparse_bytes = write_project(&sparse).unwrap();
    let tagged_bytes = write_project(&tagged).unwrap();
    assert!(tagged_bytes.len() > sparse_bytes.len());

    // Absent tags leave the documented defaults in place.
    let round = read_project(&sparse_bytes).unwrap();
    assert!(!round.windows[0].ignore_rtl);
    assert_eq!(round.windows[0].color, None);
    assert_eq!(round.windows[0].background, Background::None);
}

#[test]
fn legacy_stream_without_framing_still_reads() {
    let project = full_project();
    let sealed = write_project(&project).unwrap();

    // Strip magic + version header and the integrity trailer, leaving
    // the bare section stream the original tool would have produced.
    let payload = &sealed[MAGIC_BYTES.len() + 4..sealed.len() - TRAILER_LEN];
    let round = read_project(payload).unwrap();
    assert_eq!(round, project);
}

#[test]
fn truncated_file_is_rejected() {
    let project = full_project();
    let sealed = write_project(&project).unwrap();
    let truncated = &sealed[..sealed.len() - 3];
    assert!(matches!(
        read_project(truncated).unwrap_err(),
        FormatError::ChecksumMismatch
    ));
}

#[test]
fn flipped_payload_byte_is_rejected() {
    let project = full_project();
    let mut sealed = write_project(&project).unwrap();
    let mid = sealed.len() / 2;
    sealed[mid] ^= 0x40;
    assert!(matches!(
        read_project(&sealed).unwrap_err(),
        FormatError::ChecksumMismatch
    ));
}

/// Build a legacy stream for one window holding one control with the
/// given column halves.
fn control_with_columns(displays: usize, internals: usize) -> Vec<u8> {
    let mut w = SectionWriter::new();
    // header
    w.section(|w| {
        w.put_u16(8);
        w.put_str("")?;
        Ok(())
    })
    .unwrap();
    // window
    w.section(|w| {
        w.section(|w| {
            w.put_str("W")?;
            for _ in 0..4 {
                w.put_i16(0);
            }
            w.put_u8(0);
            Ok(())
        })?;
        w.section(|w| w.put_str(""))?;
        // control
        w.section(|w| {
            w.section(|w| {
                w.put_str("tbl")?;
                for _ in 0..4 {
                    w.put_i16(0);
                }
                for i in 0..displays {
                    w.put_u8(Tag::DisplayColumn.as_u8());
                    w.put_str(&format!("col{i}"))?;
                    w.put_i16(50);
                    w.put_u8(0);
                }
                Ok(())
            })?;
            w.section(|w| {
                for i in 0..internals {
                    w.put_u8(Tag::InternalColumn.as_u8());
                    w.put_str(&format!("member{i}"))?;
                    w.put_u8(0);
                }
                Ok(())
            })
        })
    })
    .unwrap();
    w.finish().unwrap()
}

#[test]
fn matched_column_counts_decode_in_order() {
    let bytes = control_with_columns(2, 2);
    let project = read_project(&bytes).unwrap();
    let control = &project.windows[0].controls[0];
    assert_eq!(control.columns.len(), 2);
    assert_eq!(control.columns[0].display.label, "col0");
    assert_eq!(control.columns[0].internal.member, "member0");
    assert_eq!(control.columns[1].display.label, "col1");
    assert_eq!(control.columns[1].internal.member, "member1");
}

#[test]
fn missing_internal_columns_are_rejected() {
    let bytes = control_with_columns(2, 1);
    let err = read_project(&bytes).unwrap_err();
    assert!(matches!(
        err,
        FormatError::ColumnCountMismatch {
            display: 2,
            internal: 1,
            ..
        }
    ));
}

#[test]
fn excess_internal_columns_are_rejected() {
    let bytes = control_with_columns(1, 2);
    let err = read_project(&bytes).unwrap_err();
    assert!(matches!(err, FormatError::ColumnCountMismatch { .. }));
}

#[test]
fn unknown_tag_policies() {
    // Append an undefined tag with a section value to the header of a
    // legacy stream; skip recovers, strict errors.
    let mut w = SectionWriter::new();
    w.section(|w| {
        w.put_u16(8);
        w.put_str("gen.rs")?;
        w.put_u8(250);
        w.section(|w| {
            w.put_str("payload from a newer tool")?;
            w.put_u32(7);
            Ok(())
        })?;
        Ok(())
    })
    .unwrap();
    let bytes = w.finish().unwrap();

    let project = read_project(&bytes).unwrap();
    assert_eq!(project.source_path, "gen.rs");

    let strict = ReaderOptions {
        unknown_tags: UnknownTagPolicy::Error,
    };
    assert!(matches!(
        read_project_with_options(&bytes, &strict).unwrap_err(),
        FormatError::UnknownTag { tag: 250, .. }
    ));
}
