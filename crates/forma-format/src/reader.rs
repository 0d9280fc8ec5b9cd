//! Project file reader.
//!
//! Mirrors the writer's layout exactly. Window count is implicit: the
//! top-level loop runs while the buffer has more bytes, and the same
//! convention bounds the controls within each window section. Every
//! decode failure surfaces as a [`FormatError`]; the caller never
//! receives a partially decoded graph.

use forma_model::{
    Alignment, Background, Color3, Color4, Container, ContainerLink, Control, Member, MemberType,
    Orientation, Project, Rect, TableColumn, TableDefinition, TextStyle, Window,
};
use forma_model::{ColumnDisplay, ColumnInternal};

use crate::error::{FormatError, Result};
use crate::frame::{self, Framing};
use crate::section::SectionReader;
use crate::tags::Tag;

/// What to do when the tag loop meets a byte outside the tag table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownTagPolicy {
    /// Warn and skip the tagged value, resynchronizing on its kind
    /// marker. Files from newer tools keep loading.
    #[default]
    Skip,
    /// Fail decoding, matching the original tool's behavior.
    Error,
}

/// Reader configuration.
#[derive(Debug, Clone, Default)]
pub struct ReaderOptions {
    pub unknown_tags: UnknownTagPolicy,
}

/// Deserialize a project with default options.
pub fn read_project(bytes: &[u8]) -> Result<Project> {
    read_project_with_options(bytes, &ReaderOptions::default())
}

/// Deserialize a project.
///
/// Accepts both the current framing and bare legacy streams.
pub fn read_project_with_options(bytes: &[u8], options: &ReaderOptions) -> Result<Project> {
    let (payload, framing) = frame::unseal(bytes)?;
    if framing == Framing::Legacy {
        tracing::debug!("reading unframed legacy project stream");
    }

    let mut cursor = SectionReader::new(payload);
    let mut header = cursor.get_section()?;
    let mut project = parse_header(&mut header, options)?;

    while cursor.has_more() {
        let mut window_section = cursor.get_section()?;
        project
            .windows
            .push(parse_window(&mut window_section, options)?);
    }

    tracing::debug!(
        windows = project.windows.len(),
        controls = project.control_count(),
        "decoded project"
    );
    Ok(project)
}

fn skip_unknown(
    section: &mut SectionReader<'_>,
    tag: u8,
    offset: usize,
    options: &ReaderOptions,
) -> Result<()> {
    match options.unknown_tags {
        UnknownTagPolicy::Error => Err(FormatError::UnknownTag { tag, offset }),
        UnknownTagPolicy::Skip => {
            tracing::warn!(tag, offset, "skipping unrecognized property tag");
            section.skip_value()
        }
    }
}

fn member_type(value: u8) -> Result<MemberType> {
    MemberType::from_byte(value).ok_or(FormatError::invalid_enum("member type", value))
}

fn alignment(value: u8) -> Result<Alignment> {
    Alignment::from_byte(value).ok_or(FormatError::invalid_enum("alignment", value))
}

/// Accumulates the background pieces, which arrive split across a
/// record's two subsections, until the whole record has been read.
#[derive(Default)]
struct BackgroundParts {
    kind: u8,
    texture: String,
    alternate: Option<String>,
    border: u8,
}

impl BackgroundParts {
    fn assemble(self) -> Result<Background> {
        match self.kind {
            0 => Ok(Background::None),
            1 => Ok(Background::Texture {
                texture: self.texture,
                alternate: self.alternate,
            }),
            2 => Ok(Background::BorderedTexture {
                texture: self.texture,
                alternate: self.alternate,
                border: self.border,
            }),
            3 => Ok(Background::LegacyGfx { name: self.texture }),
            value => Err(FormatError::invalid_enum("background kind", value)),
        }
    }
}

fn parse_header(section: &mut SectionReader<'_>, options: &ReaderOptions) -> Result<Project> {
    let mut project = Project::new(String::new());
    project.grid_size = section.get_u16()?;
    project.source_path = section.get_str()?;

    while section.has_more() {
        let offset = section.offset();
        let tag_byte = section.get_u8()?;
        match Tag::from_u8(tag_byte) {
            Some(Tag::ProjectName) => project.name = section.get_str()?,
            Some(Tag::ProjectDirectory) => project.directory = section.get_str()?,
            Some(Tag::TableDef) => {
                let mut table_section = section.get_section()?;
                project
                    .tables
                    .push(parse_table_def(&mut table_section, options)?);
            }
            _ => skip_unknown(section, tag_byte, offset, options)?,
        }
    }
    Ok(project)
}

fn parse_table_def(
    section: &mut SectionReader<'_>,
    options: &ReaderOptions,
) -> Result<TableDefinition> {
    let mut table = TableDefinition::new(section.get_str()?);

    while section.has_more() {
        let offset = section.offset();
        let tag_byte = section.get_u8()?;
        match Tag::from_u8(tag_byte) {
            Some(Tag::TableColumn) => {
                let member = section.get_str()?;
                let internal_type = member_type(section.get_u8()?)?;
                let label = section.get_str()?;
                let width = section.get_i16()?;
                let align = alignment(section.get_u8()?)?;
                table.columns.push(TableColumn {
                    display: ColumnDisplay::new(label, width, align),
                    internal: ColumnInternal::new(member, internal_type),
                });
            }
            Some(Tag::HighlightColor) => table.highlight_color = Color4(section.get_color4()?),
            Some(Tag::DividerColor) => table.divider_color = Color3(section.get_color3()?),
            _ => skip_unknown(section, tag_byte, offset, options)?,
        }
    }
    Ok(table)
}

fn parse_window(section: &mut SectionReader<'_>, options: &ReaderOptions) -> Result<Window> {
    let mut essential = section.get_section()?;
    let name = essential.get_str()?;
    let rect = Rect::new(
        essential.get_i16()?,
        essential.get_i16()?,
        essential.get_i16()?,
        essential.get_i16()?,
    );
    let orientation_byte = essential.get_u8()?;
    let mut window = Window::new(name, rect);
    window.orientation = Orientation::from_byte(orientation_byte)
        .ok_or(FormatError::invalid_enum("orientation", orientation_byte))?;

    let mut background = BackgroundParts::default();
    while essential.has_more() {
        let offset = essential.offset();
        let tag_byte = essential.get_u8()?;
        match Tag::from_u8(tag_byte) {
            Some(Tag::BorderWidth) => background.border = essential.get_u8()?,
            Some(Tag::Texture) => background.texture = essential.get_str()?,
            Some(Tag::AlternateTexture) => background.alternate = Some(essential.get_str()?),
            _ => skip_unknown(&mut essential, tag_byte, offset, options)?,
        }
    }

    let mut optional = section.get_section()?;
    let parent = optional.get_str()?;
    if !parent.is_empty() {
        window.parent = Some(parent);
    }
    while optional.has_more() {
        let offset = optional.offset();
        let tag_byte = optional.get_u8()?;
        match Tag::from_u8(tag_byte) {
            Some(Tag::BackgroundKind) => background.kind = optional.get_u8()?,
            Some(Tag::Color) => window.color = Some(Color4(optional.get_color4()?)),
            Some(Tag::IgnoreRtl) => window.ignore_rtl = optional.get_bool()?,
            Some(Tag::Member) => {
                let name = optional.get_str()?;
                let ty = member_type(optional.get_u8()?)?;
                window.members.push(Member::new(name, ty));
            }
            _ => skip_unknown(&mut optional, tag_byte, offset, options)?,
        }
    }
    window.background = background.assemble()?;

    while section.has_more() {
        let mut control_section = section.get_section()?;
        window
            .controls
            .push(parse_control(&mut control_section, options)?);
    }
    Ok(window)
}

fn parse_control(section: &mut SectionReader<'_>, options: &ReaderOptions) -> Result<Control> {
    let mut essential = section.get_section()?;
    let name = essential.get_str()?;
    let rect = Rect::new(
        essential.get_i16()?,
        essential.get_i16()?,
        essential.get_i16()?,
        essential.get_i16()?,
    );
    let mut control = Control::new(name, rect);

    let mut displays: Vec<ColumnDisplay> = Vec::new();
    while essential.has_more() {
        let offset = essential.offset();
        let tag_byte = essential.get_u8()?;
        match Tag::from_u8(tag_byte) {
            Some(Tag::TextKey) => {
                control.text.get_or_insert_default().key = essential.get_str()?;
            }
            Some(Tag::TextDynamic) => {
                control.text.get_or_insert_default().dynamic = essential.get_bool()?;
            }
            Some(Tag::TextScale) => {
                control.text.get_or_insert_default().scale = essential.get_f32()?;
            }
            Some(Tag::TextColor) => {
                control.text.get_or_insert_default().color = Color4(essential.get_color4()?);
            }
            Some(Tag::TextAlign) => {
                control.text.get_or_insert_default().align = alignment(essential.get_u8()?)?;
            }
            Some(Tag::TextStyle) => {
                let value = essential.get_u8()?;
                control.text.get_or_insert_default().style = TextStyle::from_byte(value)
                    .ok_or(FormatError::invalid_enum("text style", value))?;
            }
            Some(Tag::TooltipKey) => {
                control.tooltip.get_or_insert_default().key = essential.get_str()?;
            }
            Some(Tag::TooltipScale) => {
                control.tooltip.get_or_insert_default().scale = essential.get_f32()?;
            }
            Some(Tag::DisplayColumn) => {
                let label = essential.get_str()?;
                let width = essential.get_i16()?;
                let align = alignment(essential.get_u8()?)?;
                displays.push(ColumnDisplay::new(label, width, align));
            }
            _ => skip_unknown(&mut essential, tag_byte, offset, options)?,
        }
    }

    let mut optional = section.get_section()?;
    let mut background = BackgroundParts::default();
    let mut container_kind = 0u8;
    let mut link = ContainerLink::default();
    let mut internals: Vec<ColumnInternal> = Vec::new();

    while optional.has_more() {
        let offset = optional.offset();
        let tag_byte = optional.get_u8()?;
        match Tag::from_u8(tag_byte) {
            Some(Tag::BackgroundKind) => background.kind = optional.get_u8()?,
            Some(Tag::Texture) => background.texture = optional.get_str()?,
            Some(Tag::AlternateTexture) => background.alternate = Some(optional.get_str()?),
            Some(Tag::BorderWidth) => background.border = optional.get_u8()?,
            Some(Tag::LeftClick) => control.left_click = optional.get_bool()?,
            Some(Tag::RightClick) => control.right_click = optional.get_bool()?,
            Some(Tag::ShiftClick) => control.shift_click = optional.get_bool()?,
            Some(Tag::ContainerKind) => container_kind = optional.get_u8()?,
            Some(Tag::ContainerChild) => link.child_window = optional.get_str()?,
            Some(Tag::ContainerElement) => link.element_type = optional.get_str()?,
            Some(Tag::InternalColumn) => {
                // The display half was read in the earlier subsection;
                // an internal half beyond that count has nothing to
                // correlate with.
                if internals.len() >= displays.len() {
                    return Err(FormatError::column_count_mismatch(
                        &control.name,
                        displays.len(),
                        internals.len() + 1,
                    ));
                }
                let member = optional.get_str()?;
                let ty = member_type(optional.get_u8()?)?;
                internals.push(ColumnInternal::new(member, ty));
            }
            Some(Tag::Member) => {
                let name = optional.get_str()?;
                let ty = member_type(optional.get_u8()?)?;
                control.members.push(Member::new(name, ty));
            }
            Some(Tag::TableInsert) => control.table_inserts.push(optional.get_str()?),
            _ => skip_unknown(&mut optional, tag_byte, offset, options)?,
        }
    }

    if internals.len() != displays.len() {
        return Err(FormatError::column_count_mismatch(
            &control.name,
            displays.len(),
            internals.len(),
        ));
    }
    control.columns = displays
        .into_iter()
        .zip(internals)
        .map(|(display, internal)| TableColumn { display, internal })
        .collect();
    control.background = background.assemble()?;
    control.container = Container::from_kind(container_kind, link)
        .ok_or(FormatError::invalid_enum("container kind", container_kind))?;

    Ok(control)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionWriter;
    use crate::writer::write_project;

    fn minimal_project() -> Project {
        let mut project = Project::new("hud");
        project
            .windows
            .push(Window::new("Main", Rect::new(0, 0, 320, 240)));
        project
    }

    #[test]
    fn empty_parent_reads_as_none() {
        let project = minimal_project();
        let bytes = write_project(&project).unwrap();
        let round = read_project(&bytes).unwrap();
        assert_eq!(round.windows[0].parent, None);
    }

    #[test]
    fn unknown_tag_skip_recovers() {
        // Legacy stream with a bogus tag in the header.
        let mut writer = SectionWriter::new();
        writer
            .section(|w| {
                w.put_u16(8);
                w.put_str("out.rs")?;
                w.put_u8(200); // undefined tag
                w.put_str("from the future")?;
                w.put_u8(Tag::ProjectName.as_u8());
                w.put_str("hud")?;
                Ok(())
            })
            .unwrap();
        let bytes = writer.finish().unwrap();

        let project = read_project(&bytes).unwrap();
        assert_eq!(project.name, "hud");
        assert_eq!(project.grid_size, 8);

        let strict = ReaderOptions {
            unknown_tags: UnknownTagPolicy::Error,
        };
        let err = read_project_with_options(&bytes, &strict).unwrap_err();
        assert!(matches!(err, FormatError::UnknownTag { tag: 200, .. }));
    }

    #[test]
    fn misplaced_known_tag_follows_unknown_policy() {
        // TextKey is defined but has no meaning in the header section.
        let mut writer = SectionWriter::new();
        writer
            .section(|w| {
                w.put_u16(8);
                w.put_str("")?;
                w.put_u8(Tag::TextKey.as_u8());
                w.put_str("stray")?;
                Ok(())
            })
            .unwrap();
        let bytes = writer.finish().unwrap();

        assert!(read_project(&bytes).is_ok());
        let strict = ReaderOptions {
            unknown_tags: UnknownTagPolicy::Error,
        };
        assert!(matches!(
            read_project_with_options(&bytes, &strict).unwrap_err(),
            FormatError::UnknownTag { .. }
        ));
    }
}
