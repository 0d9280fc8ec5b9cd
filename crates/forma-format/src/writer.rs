//! Project file writer.
//!
//! Serializes a [`Project`] into the framed section stream. Write order
//! must match the reader exactly: header section, then one section per
//! window, each holding an essential subsection, an optional subsection,
//! and one subsection per control. Tagged fields are sparse: a field at
//! its documented default is not written at all.

use forma_model::{Background, Color3, Color4, Control, Project, TableDefinition, Window};

use crate::error::Result;
use crate::frame;
use crate::section::SectionWriter;
use crate::tags::Tag;

/// Serialize a project to bytes in the current framing.
pub fn write_project(project: &Project) -> Result<Vec<u8>> {
    let mut writer = SectionWriter::new();
    write_header(&mut writer, project)?;
    for window in &project.windows {
        write_window(&mut writer, window)?;
    }
    let payload = writer.finish()?;
    tracing::debug!(
        windows = project.windows.len(),
        controls = project.control_count(),
        bytes = payload.len(),
        "encoded project"
    );
    Ok(frame::seal(&payload))
}

fn put_tag(writer: &mut SectionWriter, tag: Tag) {
    writer.put_u8(tag.as_u8());
}

/// Split a background into the pieces the wire layout carries separately.
fn background_parts(background: &Background) -> (u8, &str, Option<&str>, u8) {
    let kind = background.kind_byte();
    match background {
        Background::None => (kind, "", None, 0),
        Background::Texture { texture, alternate } => {
            (kind, texture, alternate.as_deref(), 0)
        }
        Background::BorderedTexture {
            texture,
            alternate,
            border,
        } => (kind, texture, alternate.as_deref(), *border),
        Background::LegacyGfx { name } => (kind, name, None, 0),
    }
}

fn write_header(writer: &mut SectionWriter, project: &Project) -> Result<()> {
    writer.section(|w| {
        w.put_u16(project.grid_size);
        w.put_str(&project.source_path)?;

        if !project.name.is_empty() {
            put_tag(w, Tag::ProjectName);
            w.put_str(&project.name)?;
        }
        if !project.directory.is_empty() {
            put_tag(w, Tag::ProjectDirectory);
            w.put_str(&project.directory)?;
        }
        for table in &project.tables {
            put_tag(w, Tag::TableDef);
            w.section(|w| write_table_def(w, table))?;
        }
        Ok(())
    })
}

fn write_table_def(writer: &mut SectionWriter, table: &TableDefinition) -> Result<()> {
    writer.put_str(&table.name)?;
    for column in &table.columns {
        put_tag(writer, Tag::TableColumn);
        writer.put_str(&column.internal.member)?;
        writer.put_u8(column.internal.member_type.as_byte());
        writer.put_str(&column.display.label)?;
        writer.put_i16(column.display.width);
        writer.put_u8(column.display.align.as_byte());
    }
    if table.highlight_color != Color4::WHITE {
        put_tag(writer, Tag::HighlightColor);
        writer.put_color4(table.highlight_color.0);
    }
    if table.divider_color != Color3::BLACK {
        put_tag(writer, Tag::DividerColor);
        writer.put_color3(table.divider_color.0);
    }
    Ok(())
}

fn write_window(writer: &mut SectionWriter, window: &Window) -> Result<()> {
    let (bg_kind, texture, alternate, border) = background_parts(&window.background);

    writer.section(|w| {
        // Essential subsection: positional fields first, then the
        // structural background pieces as sparse tags.
        w.section(|w| {
            w.put_str(&window.name)?;
            w.put_i16(window.rect.x);
            w.put_i16(window.rect.y);
            w.put_i16(window.rect.w);
            w.put_i16(window.rect.h);
            w.put_u8(window.orientation.as_byte());

            if border != 0 {
                put_tag(w, Tag::BorderWidth);
                w.put_u8(border);
            }
            if !texture.is_empty() {
                put_tag(w, Tag::Texture);
                w.put_str(texture)?;
            }
            if let Some(alternate) = alternate
                && !alternate.is_empty()
            {
                put_tag(w, Tag::AlternateTexture);
                w.put_str(alternate)?;
            }
            Ok(())
        })?;

        // Optional subsection: parent name is positional (empty = none).
        w.section(|w| {
            w.put_str(window.parent.as_deref().unwrap_or(""))?;

            if bg_kind != 0 {
                put_tag(w, Tag::BackgroundKind);
                w.put_u8(bg_kind);
            }
            if let Some(color) = window.color {
                put_tag(w, Tag::Color);
                w.put_color4(color.0);
            }
            if window.ignore_rtl {
                put_tag(w, Tag::IgnoreRtl);
                w.put_bool(true);
            }
            for member in &window.members {
                put_tag(w, Tag::Member);
                w.put_str(&member.name)?;
                w.put_u8(member.member_type.as_byte());
            }
            Ok(())
        })?;

        for control in &window.controls {
            write_control(w, control)?;
        }
        Ok(())
    })
}

fn write_control(writer: &mut SectionWriter, control: &Control) -> Result<()> {
    let (bg_kind, texture, alternate, border) = background_parts(&control.background);

    writer.section(|w| {
        // Essential subsection: name and geometry positional, then text,
        // tooltip, and display-column attributes.
        w.section(|w| {
            w.put_str(&control.name)?;
            w.put_i16(control.rect.x);
            w.put_i16(control.rect.y);
            w.put_i16(control.rect.w);
            w.put_i16(control.rect.h);

            if let Some(text) = &control.text {
                if !text.key.is_empty() {
                    put_tag(w, Tag::TextKey);
                    w.put_str(&text.key)?;
                }
                if text.dynamic {
                    put_tag(w, Tag::TextDynamic);
                    w.put_bool(true);
                }
                if text.scale != 1.0 {
                    put_tag(w, Tag::TextScale);
                    w.put_f32(text.scale);
                }
                if text.color != Color4::WHITE {
                    put_tag(w, Tag::TextColor);
                    w.put_color4(text.color.0);
                }
                if text.align != forma_model::Alignment::Left {
                    put_tag(w, Tag::TextAlign);
                    w.put_u8(text.align.as_byte());
                }
                if text.style != forma_model::TextStyle::Normal {
                    put_tag(w, Tag::TextStyle);
                    w.put_u8(text.style.as_byte());
                }
            }
            if let Some(tooltip) = &control.tooltip {
                if !tooltip.key.is_empty() {
                    put_tag(w, Tag::TooltipKey);
                    w.put_str(&tooltip.key)?;
                }
                if tooltip.scale != 1.0 {
                    put_tag(w, Tag::TooltipScale);
                    w.put_f32(tooltip.scale);
                }
            }
            for column in &control.columns {
                put_tag(w, Tag::DisplayColumn);
                w.put_str(&column.display.label)?;
                w.put_i16(column.display.width);
                w.put_u8(column.display.align.as_byte());
            }
            Ok(())
        })?;

        // Optional subsection: background, click actions, container and
        // table internals, members, inserts.
        w.section(|w| {
            if bg_kind != 0 {
                put_tag(w, Tag::BackgroundKind);
                w.put_u8(bg_kind);
            }
            if !texture.is_empty() {
                put_tag(w, Tag::Texture);
                w.put_str(texture)?;
            }
            if let Some(alternate) = alternate
                && !alternate.is_empty()
            {
                put_tag(w, Tag::AlternateTexture);
                w.put_str(alternate)?;
            }
            if border != 0 {
                put_tag(w, Tag::BorderWidth);
                w.put_u8(border);
            }
            if control.left_click {
                put_tag(w, Tag::LeftClick);
                w.put_bool(true);
            }
            if control.right_click {
                put_tag(w, Tag::RightClick);
                w.put_bool(true);
            }
            if control.shift_click {
                put_tag(w, Tag::ShiftClick);
                w.put_bool(true);
            }

            let container_kind = control.container.kind_byte();
            if container_kind != 0 {
                put_tag(w, Tag::ContainerKind);
                w.put_u8(container_kind);
            }
            if let Some(link) = control.container.link() {
                if !link.child_window.is_empty() {
                    put_tag(w, Tag::ContainerChild);
                    w.put_str(&link.child_window)?;
                }
                if !link.element_type.is_empty() {
                    put_tag(w, Tag::ContainerElement);
                    w.put_str(&link.element_type)?;
                }
            }

            // The internal half of each column; correlated positionally
            // with the display half written in the essential subsection.
            for column in &control.columns {
                put_tag(w, Tag::InternalColumn);
                w.put_str(&column.internal.member)?;
                w.put_u8(column.internal.member_type.as_byte());
            }
            for member in &control.members {
                put_tag(w, Tag::Member);
                w.put_str(&member.name)?;
                w.put_u8(member.member_type.as_byte());
            }
            for insert in &control.table_inserts {
                put_tag(w, Tag::TableInsert);
                w.put_str(insert)?;
            }
            Ok(())
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use forma_model::Rect;

    #[test]
    fn default_window_writes_no_tags() {
        let mut project = Project::new(String::new());
        project.source_path = String::new();
        project
            .windows
            .push(Window::new("Main", Rect::new(0, 0, 100, 50)));

        let bytes = write_project(&project).unwrap();
        let (payload, _) = frame::unseal(&bytes).unwrap();

        // Header: u16 grid + empty string. Window essential: name,
        // 4 geometry fields, orientation byte. Optional: empty parent.
        // No tag bytes anywhere for an all-default window.
        let mut reader = crate::section::SectionReader::new(payload);
        let mut header = reader.get_section().unwrap();
        header.get_u16().unwrap();
        header.get_str().unwrap();
        assert!(!header.has_more());

        let mut window = reader.get_section().unwrap();
        let mut essential = window.get_section().unwrap();
        assert_eq!(essential.get_str().unwrap(), "Main");
        for _ in 0..4 {
            essential.get_i16().unwrap();
        }
        essential.get_u8().unwrap();
        assert!(!essential.has_more());

        let mut optional = window.get_section().unwrap();
        assert_eq!(optional.get_str().unwrap(), "");
        assert!(!optional.has_more());
        assert!(!window.has_more());
        assert!(!reader.has_more());
    }
}
