use bevy::prelude::*;

/// Shared colors for the HUD and menus.
pub struct UiTheme;

impl UiTheme {
    pub const TEXT_PRIMARY: Color = Color::WHITE;
    pub const TEXT_MUTED: Color = Color::srgb_u8(156, 163, 175);
    pub const PANEL_BG: Color = Color::srgb_u8(28, 35, 51);
    pub const PANEL_BORDER: Color = Color::srgba(1.0, 1.0, 1.0, 0.05);
    pub const BUTTON_BG: Color = Color::srgba(0.2, 0.2, 0.2, 1.0);
    pub const ACCENT: Color = Color::srgb_u8(19, 91, 236);
    pub const WARNING: Color = Color::srgb(1.0, 0.3, 0.3);
}

/// Spawns a centered overlay panel with a title, handing the body off to the
/// caller.
pub fn spawn_menu_panel<M: Component>(
    commands: &mut Commands,
    marker: M,
    title: &str,
    body: impl FnOnce(&mut ChildSpawnerCommands),
) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            marker,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        row_gap: Val::Px(12.0),
                        padding: UiRect::all(Val::Px(24.0)),
                        border: UiRect::all(Val::Px(1.0)),
                        border_radius: BorderRadius::all(Val::Px(12.0)),
                        ..default()
                    },
                    BackgroundColor(UiTheme::PANEL_BG),
                    BorderColor::all(UiTheme::PANEL_BORDER),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new(title),
                        TextFont {
                            font_size: 28.0,
                            ..default()
                        },
                        TextColor(UiTheme::TEXT_PRIMARY),
                    ));
                    body(panel);
                });
        });
}

/// Spawns a button with a marker component for its pressed-state handler.
pub fn spawn_action_button<M: Component>(parent: &mut ChildSpawnerCommands, text: &str, marker: M) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(140.0),
                height: Val::Px(36.0),
                margin: UiRect::top(Val::Px(8.0)),
                border: UiRect::all(Val::Px(2.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BorderColor::all(UiTheme::ACCENT),
            BackgroundColor(UiTheme::BUTTON_BG),
            marker,
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(text),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(UiTheme::TEXT_PRIMARY),
            ));
        });
}
