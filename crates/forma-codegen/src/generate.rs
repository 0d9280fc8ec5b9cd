//! Boilerplate source generation.
//!
//! Emits one struct per window (members become fields) and handler stubs
//! per control, driving the snippet protocol for every slot. The slot
//! labels follow the `Window::Control::slot` convention; window-level
//! slots use `Window::slot`.

use forma_model::{Control, Project, Window, WindowIndex};

use crate::fences::FenceWriter;
use crate::snippets::SnippetMap;

/// Generate host source for the project, preserving fenced regions from
/// `prior_source` (pass `None` when no previous output exists).
#[must_use]
pub fn generate(project: &Project, prior_source: Option<&str>) -> String {
    let map = prior_source.map(SnippetMap::extract).unwrap_or_default();
    let index = project.window_index();
    let mut out = FenceWriter::new(map);

    out.line("// Generated by forma. Edit only between BEGIN/END fences;");
    out.line("// everything else is rewritten on the next generation pass.");
    out.blank();

    for window in &project.windows {
        emit_window(&mut out, &index, window);
    }

    let text = out.finish();
    tracing::debug!(
        windows = project.windows.len(),
        bytes = text.len(),
        "generated source"
    );
    text
}

fn emit_window(out: &mut FenceWriter, index: &WindowIndex<'_>, window: &Window) {
    let type_name = type_ident(&window.name);

    if let Some(parent) = &window.parent {
        if index.get(parent).is_some() {
            out.line(&format!("// parent window: {parent}"));
        } else {
            tracing::warn!(window = %window.name, parent = %parent, "parent window not found");
        }
    }

    out.line(&format!("pub struct {type_name} {{"));
    for member in &window.members {
        out.line(&format!(
            "    pub {}: {},",
            member.name,
            member.member_type.host_type()
        ));
    }
    for control in &window.controls {
        for member in &control.members {
            out.line(&format!(
                "    pub {}: {},",
                member.name,
                member.member_type.host_type()
            ));
        }
    }
    out.line("}");
    out.blank();

    out.line(&format!("impl {type_name} {{"));
    emit_slot_fn(out, &window.name, None, "create");
    emit_slot_fn(out, &window.name, None, "update");
    for control in &window.controls {
        emit_control(out, &window.name, control);
    }
    out.line("}");
    out.blank();
}

fn emit_control(out: &mut FenceWriter, window: &str, control: &Control) {
    emit_slot_fn(out, window, Some(&control.name), "create");
    emit_slot_fn(out, window, Some(&control.name), "update");
    if control.left_click {
        emit_slot_fn(out, window, Some(&control.name), "lbutton_action");
    }
    if control.right_click {
        emit_slot_fn(out, window, Some(&control.name), "rbutton_action");
    }
    if control.shift_click {
        emit_slot_fn(out, window, Some(&control.name), "sbutton_action");
    }
    if control.tooltip.is_some() {
        emit_slot_fn(out, window, Some(&control.name), "tooltip");
    }
}

fn emit_slot_fn(out: &mut FenceWriter, window: &str, control: Option<&str>, slot: &str) {
    let (label, fn_name) = match control {
        Some(control) => (
            format!("{window}::{control}::{slot}"),
            format!("{}_{slot}", fn_ident(control)),
        ),
        None => (format!("{window}::{slot}"), format!("on_{slot}")),
    };
    out.line(&format!("    pub fn {fn_name}(&mut self) {{"));
    out.slot(&label);
    out.line("    }");
    out.blank();
}

/// Turn a designer-facing name into a type identifier.
fn type_ident(name: &str) -> String {
    sanitize(name)
}

/// Turn a designer-facing name into a function identifier.
fn fn_ident(name: &str) -> String {
    sanitize(name).to_lowercase()
}

fn sanitize(name: &str) -> String {
    let mut out: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use forma_model::{MemberType, Rect};

    #[test]
    fn sanitize_identifiers() {
        assert_eq!(sanitize("ok_button"), "ok_button");
        assert_eq!(sanitize("item list"), "item_list");
        assert_eq!(sanitize("3d_view"), "_3d_view");
    }

    #[test]
    fn emits_struct_fields_for_members() {
        let mut project = Project::new("p");
        let mut window = Window::new("Main", Rect::new(0, 0, 100, 50));
        window
            .members
            .push(forma_model::Member::new("gold", MemberType::Int));
        project.windows.push(window);

        let out = generate(&project, None);
        assert!(out.contains("pub struct Main {"));
        assert!(out.contains("    pub gold: i32,"));
        assert!(out.contains("// BEGIN Main::create"));
    }

    #[test]
    fn click_flags_gate_handler_slots() {
        let mut project = Project::new("p");
        let mut window = Window::new("W", Rect::new(0, 0, 100, 50));
        let mut control = Control::new("b", Rect::new(0, 0, 10, 10));
        control.left_click = true;
        window.controls.push(control);
        project.windows.push(window);

        let out = generate(&project, None);
        assert!(out.contains("// BEGIN W::b::lbutton_action"));
        assert!(!out.contains("rbutton_action"));
        assert!(!out.contains("W::b::tooltip"));
    }
}
