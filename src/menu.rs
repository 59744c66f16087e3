use egui::{Id, Pos2};

use crate::colour::{NamedColour, PALETTE};
use crate::error::ToolError;
use crate::tool_state::{Thickness, ToolState};

/// A discrete choice made in the tool menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSelection {
    Colour(NamedColour),
    Thickness(Thickness),
}

impl MenuSelection {
    /// Resolves a menu id: 1..=16 are thicknesses, 100..=115 palette colours
    pub fn from_id(id: u32) -> Result<Self, ToolError> {
        if let Ok(thickness) = Thickness::new(id) {
            return Ok(Self::Thickness(thickness));
        }
        NamedColour::from_menu_id(id)
            .map(Self::Colour)
            .ok_or(ToolError::UnknownMenuId(id))
    }

    pub fn id(self) -> u32 {
        match self {
            // Every palette colour has an id
            Self::Colour(colour) => colour.menu_id().unwrap_or_default(),
            Self::Thickness(thickness) => thickness.get(),
        }
    }

    pub fn apply(self, tools: &mut ToolState) {
        log::info!("Menu selection: {:?}", self);
        match self {
            Self::Colour(colour) => tools.set_colour(colour.into()),
            Self::Thickness(thickness) => tools.select_thickness(thickness),
        }
    }
}

/// One checkable menu line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: u32,
    pub label: String,
    pub checked: bool,
    pub selection: MenuSelection,
}

/// Result of showing the menu for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuResponse {
    pub selection: Option<MenuSelection>,
    pub close: bool,
}

/// The colour and thickness menu.
///
/// Holds no state: entries are recomputed from the [`ToolState`] every time
/// the menu is shown, and clicks come back as [`MenuSelection`]s.
pub struct ToolMenu;

impl ToolMenu {
    /// Palette entries; the current colour is checked and shown in upper case
    pub fn colour_entries(tools: &ToolState) -> Vec<MenuEntry> {
        let current = tools.colour().as_named();
        PALETTE
            .iter()
            .map(|&colour| {
                let checked = current == Some(colour);
                let label = if checked {
                    colour.name().to_uppercase()
                } else {
                    colour.name().to_owned()
                };
                let selection = MenuSelection::Colour(colour);
                MenuEntry {
                    id: selection.id(),
                    label,
                    checked,
                    selection,
                }
            })
            .collect()
    }

    pub fn thickness_entries(tools: &ToolState) -> Vec<MenuEntry> {
        Thickness::all()
            .map(|thickness| MenuEntry {
                id: thickness.get(),
                label: thickness.to_string(),
                checked: thickness == tools.thickness(),
                selection: MenuSelection::Thickness(thickness),
            })
            .collect()
    }

    /// Applies the entry with the given menu id
    pub fn select_id(tools: &mut ToolState, id: u32) -> Result<(), ToolError> {
        let selection = MenuSelection::from_id(id).inspect_err(|err| {
            log::warn!("Rejected menu selection: {}", err);
        })?;
        selection.apply(tools);
        Ok(())
    }

    /// Shows the popup at `position` (screen coordinates). The caller applies
    /// the returned selection and stops showing the menu once `close` is set.
    pub fn show(ctx: &egui::Context, position: Pos2, tools: &ToolState) -> MenuResponse {
        let colours = Self::colour_entries(tools);
        let thicknesses = Self::thickness_entries(tools);

        let area = egui::Area::new(Id::new("doodle_tool_menu"))
            .order(egui::Order::Foreground)
            .fixed_pos(position)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .show(ui, |ui| {
                        let mut selection = None;
                        ui.horizontal_top(|ui| {
                            ui.vertical(|ui| {
                                selection = selection.or(entry_column(ui, &colours));
                            });
                            ui.separator();
                            ui.vertical(|ui| {
                                selection = selection.or(entry_column(ui, &thicknesses));
                            });
                        });
                        selection
                    })
                    .inner
            });

        let selection = area.inner;
        let dismissed = area.response.clicked_elsewhere()
            || ctx.input(|i| i.key_pressed(egui::Key::Escape));
        MenuResponse {
            selection,
            close: selection.is_some() || dismissed,
        }
    }
}

fn entry_column(ui: &mut egui::Ui, entries: &[MenuEntry]) -> Option<MenuSelection> {
    let mut clicked = None;
    for entry in entries {
        if ui.selectable_label(entry.checked, entry.label.as_str()).clicked() {
            clicked = Some(entry.selection);
        }
    }
    clicked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Colour;

    #[test]
    fn test_entries_reflect_tool_state() {
        let mut tools = ToolState::default();
        tools.set_colour(NamedColour::Goldenrod.into());
        tools.set_thickness(4).unwrap();

        let colours = ToolMenu::colour_entries(&tools);
        assert_eq!(colours.len(), 16);
        let checked: Vec<&MenuEntry> = colours.iter().filter(|e| e.checked).collect();
        assert_eq!(checked.len(), 1);
        assert_eq!(checked[0].label, "GOLDENROD");
        assert_eq!(checked[0].id, 110);
        assert_eq!(colours[0].label, "Black");

        let thicknesses = ToolMenu::thickness_entries(&tools);
        assert_eq!(thicknesses.len(), 16);
        let checked: Vec<u32> = thicknesses.iter().filter(|e| e.checked).map(|e| e.id).collect();
        assert_eq!(checked, vec![4]);
    }

    #[test]
    fn test_white_pen_checks_no_colour() {
        let tools = ToolState::default();
        assert!(ToolMenu::colour_entries(&tools).iter().all(|e| !e.checked));
    }

    #[test]
    fn test_select_id() {
        let mut tools = ToolState::default();
        ToolMenu::select_id(&mut tools, 102).unwrap();
        ToolMenu::select_id(&mut tools, 9).unwrap();
        assert_eq!(tools.colour(), Colour::Named(NamedColour::Red));
        assert_eq!(tools.thickness().get(), 9);

        assert_eq!(
            ToolMenu::select_id(&mut tools, 17),
            Err(ToolError::UnknownMenuId(17))
        );
        assert_eq!(
            ToolMenu::select_id(&mut tools, 116),
            Err(ToolError::UnknownMenuId(116))
        );
        assert_eq!(tools.thickness().get(), 9);
    }
}
