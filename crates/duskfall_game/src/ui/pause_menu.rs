use bevy::prelude::*;

use crate::player::camera::GameState;

const BACKDROP: Color = Color::srgba(0.02, 0.02, 0.04, 0.85);
const TITLE_COLOR: Color = Color::srgb(0.75, 0.78, 0.88);
const LABEL_COLOR: Color = Color::srgb(0.85, 0.85, 0.88);
const BUTTON_BORDER: Color = Color::srgba(0.4, 0.4, 0.4, 0.8);
const BUTTON_COLOR: Color = Color::srgb(0.13, 0.13, 0.16);
const BUTTON_HOVER: Color = Color::srgb(0.24, 0.24, 0.29);
const QUIT_COLOR: Color = Color::srgb(0.38, 0.10, 0.10);
const QUIT_HOVER: Color = Color::srgb(0.52, 0.15, 0.15);

#[derive(Component)]
pub struct PauseMenuRoot;

#[derive(Component)]
pub struct ResumeButton;

#[derive(Component)]
pub struct QuitButton;

fn menu_visibility(state: GameState) -> Visibility {
    match state {
        GameState::Paused => Visibility::Visible,
        GameState::Playing => Visibility::Hidden,
    }
}

fn spawn_menu_button(parent: &mut ChildBuilder, marker: impl Component, label: &str, base: Color) {
    parent
        .spawn((
            marker,
            Button,
            Node {
                width: Val::Px(230.0),
                height: Val::Px(46.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(base),
            BorderColor(BUTTON_BORDER),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(label),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(LABEL_COLOR),
            ));
        });
}

pub fn spawn_pause_menu(mut commands: Commands) {
    commands
        .spawn((
            PauseMenuRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(14.0),
                ..default()
            },
            BackgroundColor(BACKDROP),
            Visibility::Hidden,
            GlobalZIndex(10),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Pause"),
                TextFont {
                    font_size: 44.0,
                    ..default()
                },
                TextColor(TITLE_COLOR),
                Node {
                    margin: UiRect::bottom(Val::Px(28.0)),
                    ..default()
                },
            ));
            spawn_menu_button(parent, ResumeButton, "Reprendre", BUTTON_COLOR);
            spawn_menu_button(parent, QuitButton, "Quitter le jeu", QUIT_COLOR);
        });
}

pub fn show_hide_pause_menu(
    game_state: Res<GameState>,
    mut query: Query<&mut Visibility, With<PauseMenuRoot>>,
) {
    if !game_state.is_changed() {
        return;
    }
    for mut vis in &mut query {
        *vis = menu_visibility(*game_state);
    }
}

pub fn handle_resume_button(
    interaction: Query<&Interaction, (Changed<Interaction>, With<ResumeButton>)>,
    mut game_state: ResMut<GameState>,
    mut windows: Query<&mut Window>,
) {
    for &inter in &interaction {
        if inter == Interaction::Pressed {
            *game_state = GameState::Playing;
            if let Ok(mut window) = windows.get_single_mut() {
                window.cursor_options.grab_mode = bevy::window::CursorGrabMode::Locked;
                window.cursor_options.visible = false;
            }
        }
    }
}

pub fn handle_quit_button(
    interaction: Query<&Interaction, (Changed<Interaction>, With<QuitButton>)>,
    mut app_exit: EventWriter<AppExit>,
) {
    for &inter in &interaction {
        if inter == Interaction::Pressed {
            app_exit.send(AppExit::Success);
        }
    }
}

/// Hovering or pressing brightens a button and flips its border to the
/// same white the slot bar marks the active slot with.
pub fn button_hover(
    mut query: Query<
        (
            &Interaction,
            &mut BackgroundColor,
            &mut BorderColor,
            Option<&QuitButton>,
        ),
        (Changed<Interaction>, With<Button>),
    >,
) {
    for (interaction, mut bg, mut border, quit) in &mut query {
        let (base, hover) = if quit.is_some() {
            (QUIT_COLOR, QUIT_HOVER)
        } else {
            (BUTTON_COLOR, BUTTON_HOVER)
        };
        let lit = !matches!(interaction, Interaction::None);
        *bg = BackgroundColor(if lit { hover } else { base });
        *border = BorderColor(if lit { Color::WHITE } else { BUTTON_BORDER });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_shows_exactly_while_paused() {
        assert_eq!(menu_visibility(GameState::Paused), Visibility::Visible);
        assert_eq!(menu_visibility(GameState::Playing), Visibility::Hidden);
    }
}
