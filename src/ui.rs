//! DOM-side game presentation: the board grid, the player sprite, the dice
//! command icons, and the dialog registry.
//!
//! The yew shell renders the static surface once; everything that changes
//! while the game runs is mutated here, imperatively, in response to
//! explicit calls from the game loop. Layout state the grid depends on is
//! published through CSS custom properties on the document root so the
//! stylesheet stays the single source of sizing truth.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, HtmlDialogElement, HtmlElement, KeyboardEvent, TouchEvent, Window,
};

use crate::model::{Command, GameBoard, Player};
use crate::state::layout::{self, GridGeometry};
use crate::util::clog;

// This path is used in the DOM, so it is relative to the project root.
pub const ICON_PATH: &str = "assets/images/icons";
// These paths end up in CSS variables, so they are relative to the css folder.
pub const PLAYER_IMAGE_PATH: &str = "../assets/images/robot";
pub const TITLE_BACKGROUND: &str = "../assets/images/title-screen.png";

/// The chosen-command display always shows exactly this many slots.
pub const CHOSEN_SLOTS: usize = 3;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("required element #{0} is missing from the document")]
    MissingElement(&'static str),
    #[error("game board has {found} tiles, expected {expected}")]
    GridMismatch { expected: usize, found: usize },
    #[error("dom operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Dom(format!("{value:?}"))
    }
}

/// The fixed elements the controller mutates, resolved once at startup so
/// the rest of the code never goes hunting through the document. A missing
/// element is a broken build of the static shell and fails loudly here.
pub struct UiSurface {
    root: HtmlElement,
    board_container: Element,
    dice_results: Element,
    dice_chosen: Element,
    lifes: Element,
    title_scene: HtmlElement,
    nav: Element,
}

impl UiSurface {
    pub fn from_document(document: &Document) -> Result<Self, UiError> {
        let root = document
            .document_element()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .ok_or(UiError::MissingElement("root"))?;
        let title_scene = Self::require(document, "title-scene")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| UiError::MissingElement("title-scene"))?;
        let nav = document
            .query_selector("nav")?
            .ok_or(UiError::MissingElement("nav"))?;
        // Purely stylesheet-driven parts of the contract still have to be
        // present, they are just never touched after this check.
        Self::require(document, "game-lifes")?;
        Self::require(document, "game-player-info")?;
        Ok(Self {
            root,
            board_container: Self::require(document, "game-board-container")?,
            dice_results: Self::require(document, "game-dice-results")?,
            dice_chosen: Self::require(document, "game-dice-chosen")?,
            lifes: Self::require(document, "lifes")?,
            title_scene,
            nav,
        })
    }

    fn require(document: &Document, id: &'static str) -> Result<Element, UiError> {
        document.get_element_by_id(id).ok_or(UiError::MissingElement(id))
    }

    fn set_root_property(&self, name: &str, value: &str) -> Result<(), UiError> {
        self.root.style().set_property(name, value)?;
        Ok(())
    }
}

struct TitleListeners {
    keydown: Closure<dyn FnMut(KeyboardEvent)>,
    touchend: Closure<dyn FnMut(TouchEvent)>,
}

pub struct UiController {
    window: Window,
    document: Document,
    surface: UiSurface,
    /// Geometry of the current map, shared with the resize listener.
    geometry: Rc<Cell<Option<GridGeometry>>>,
    /// Tile elements of the current grid, row-major.
    tiles: Vec<Element>,
    /// The one player node, created once and re-parented between tiles.
    player_node: Element,
    icons: HashMap<String, Element>,
    dialogs: HashMap<String, HtmlDialogElement>,
    /// Click closures backing the currently displayed dice icons; replaced
    /// wholesale together with the icons they belong to.
    dice_closures: Vec<Closure<dyn FnMut()>>,
    /// Live title-scene input listeners, if the title scene is showing.
    title_listeners: Option<TitleListeners>,
    resize_listener: Closure<dyn FnMut()>,
}

impl UiController {
    /// Builds the controller and subscribes the tile-size recalculation to
    /// viewport resizes for as long as the controller lives.
    pub fn new(surface: UiSurface) -> Result<Self, UiError> {
        let window = web_sys::window().ok_or(UiError::MissingElement("window"))?;
        let document = window
            .document()
            .ok_or(UiError::MissingElement("document"))?;

        let player_node = document.create_element("div")?;
        player_node.set_id("player");

        let geometry: Rc<Cell<Option<GridGeometry>>> = Rc::new(Cell::new(None));
        let resize_listener = {
            let window = window.clone();
            let root = surface.root.clone();
            let nav = surface.nav.clone();
            let geometry = geometry.clone();
            Closure::wrap(Box::new(move || {
                if let Some(current) = geometry.get() {
                    let _ = apply_tile_size(&window, &root, &nav, current);
                }
            }) as Box<dyn FnMut()>)
        };
        window
            .add_event_listener_with_callback("resize", resize_listener.as_ref().unchecked_ref())?;

        Ok(Self {
            window,
            document,
            surface,
            geometry,
            tiles: Vec::new(),
            player_node,
            icons: HashMap::new(),
            dialogs: HashMap::new(),
            dice_closures: Vec::new(),
            title_listeners: None,
            resize_listener,
        })
    }

    // ---------------- Scenes ----------------

    /// Shows the title background, hides the running-game UI and arms the
    /// two start inputs (Space, or a tap on the title scene). Re-entering
    /// replaces any listeners from a previous entry; leaving through
    /// `display_game_scene` detaches them.
    pub fn display_title_scene(&mut self, on_start: Rc<dyn Fn()>) -> Result<(), UiError> {
        self.detach_title_listeners();
        self.surface
            .set_root_property("--visibleWhileGameIsRunning", "hidden")?;
        self.surface
            .set_root_property("--background-image", &format!("url('{TITLE_BACKGROUND}')"))?;
        self.surface
            .title_scene
            .style()
            .set_property("display", "flex")?;

        let keydown = {
            let on_start = on_start.clone();
            Closure::wrap(Box::new(move |event: KeyboardEvent| {
                if event.code() == "Space" {
                    on_start();
                }
            }) as Box<dyn FnMut(KeyboardEvent)>)
        };
        let touchend = {
            let on_start = on_start.clone();
            Closure::wrap(Box::new(move |_event: TouchEvent| {
                on_start();
            }) as Box<dyn FnMut(TouchEvent)>)
        };
        self.window
            .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
        self.surface
            .title_scene
            .add_event_listener_with_callback("touchend", touchend.as_ref().unchecked_ref())?;
        self.title_listeners = Some(TitleListeners { keydown, touchend });
        Ok(())
    }

    /// The inverse toggle: drops the title inputs, hides the title scene
    /// and reveals the running-game UI.
    pub fn display_game_scene(&mut self) -> Result<(), UiError> {
        self.detach_title_listeners();
        self.surface
            .title_scene
            .style()
            .set_property("display", "none")?;
        self.surface.set_root_property("--background-image", "none")?;
        self.surface
            .set_root_property("--visibleWhileGameIsRunning", "visible")?;
        Ok(())
    }

    fn detach_title_listeners(&mut self) {
        if let Some(listeners) = self.title_listeners.take() {
            let _ = self.window.remove_event_listener_with_callback(
                "keydown",
                listeners.keydown.as_ref().unchecked_ref(),
            );
            let _ = self.surface.title_scene.remove_event_listener_with_callback(
                "touchend",
                listeners.touchend.as_ref().unchecked_ref(),
            );
        }
    }

    // ---------------- Grid lifecycle ----------------

    /// Rebuilds the whole board presentation for a new map: grid, tile
    /// size, terrain, flag, then the player.
    pub fn setup_new_map(&mut self, board: &GameBoard, player: &Player) -> Result<(), UiError> {
        self.surface
            .set_root_property("--visibleWhileGameIsRunning", "visible")?;
        let geometry = board.dimension();
        self.generate_grid(geometry)?;
        self.set_tile_size()?;
        self.draw_board(board)?;
        self.initialize_player(player)?;
        Ok(())
    }

    /// Discards the previous grid and builds `rows` row containers of
    /// `columns` tiles, each tagged with its integer coordinates.
    pub fn generate_grid(&mut self, geometry: GridGeometry) -> Result<(), UiError> {
        self.surface
            .set_root_property("--columns", &geometry.columns.to_string())?;
        self.surface
            .set_root_property("--rows", &geometry.rows.to_string())?;

        // Reset the container, in case a previous round left a grid behind.
        self.surface.board_container.set_inner_html("");
        self.tiles.clear();
        self.geometry.set(Some(geometry));

        for row in 0..geometry.rows {
            let row_div = self.document.create_element("div")?;
            row_div.class_list().add_1("grid-row")?;
            for column in 0..geometry.columns {
                let tile = self.document.create_element("div")?;
                tile.class_list().add_1("tile")?;
                tile.set_attribute("row", &row.to_string())?;
                tile.set_attribute("column", &column.to_string())?;
                row_div.append_child(&tile)?;
                self.tiles.push(tile);
            }
            self.surface.board_container.append_child(&row_div)?;
        }
        Ok(())
    }

    /// Paints terrain classes and the flag marker onto the current grid.
    ///
    /// The tile count is checked against the board dimension before any
    /// painting happens; a mismatch means the grid belongs to another map
    /// and is a contract violation the caller has to hear about.
    pub fn draw_board(&self, board: &GameBoard) -> Result<(), UiError> {
        let geometry = board.dimension();
        let expected = geometry.tile_count();
        let found = self
            .surface
            .board_container
            .query_selector_all(".grid-row > .tile")?
            .length() as usize;
        if found != expected {
            clog(&format!(
                "drawing board of size {} x {}",
                geometry.columns, geometry.rows
            ));
            return Err(UiError::GridMismatch { expected, found });
        }

        for row in 0..geometry.rows {
            for column in 0..geometry.columns {
                if let Some(tile) = self.tile_at(row, column) {
                    tile.class_list()
                        .add_1(board.cell(row, column).terrain.css_class())?;
                }
            }
        }

        let flag = board.flag_location;
        if let Some(tile) = self.tile_at(flag.row, flag.column) {
            tile.set_attribute("id", "flag")?;
        }
        Ok(())
    }

    /// Recomputes `--tile-size` from the current viewport and the current
    /// map geometry. Called once per new map and from every window resize.
    pub fn set_tile_size(&self) -> Result<(), UiError> {
        let Some(geometry) = self.geometry.get() else {
            return Ok(());
        };
        apply_tile_size(&self.window, &self.surface.root, &self.surface.nav, geometry)
    }

    fn tile_at(&self, row: u32, column: u32) -> Option<&Element> {
        let geometry = self.geometry.get()?;
        if row >= geometry.rows || column >= geometry.columns {
            return None;
        }
        self.tiles.get((row * geometry.columns + column) as usize)
    }

    // ---------------- Player ----------------

    pub fn initialize_player(&self, player: &Player) -> Result<(), UiError> {
        self.surface.set_root_property(
            "--player-original-sprite",
            &format!("url('{}')", sprite_url(player)),
        )?;
        self.align_player_sprite(player)?;
        self.move_player_sprite(player)?;
        self.update_player_lifes(player)?;
        Ok(())
    }

    /// Re-parents the player node into the tile at the player's location.
    pub fn move_player_sprite(&self, player: &Player) -> Result<(), UiError> {
        let Some(tile) = self.tile_at(player.location.row, player.location.column) else {
            return Ok(());
        };
        tile.append_child(&self.player_node)?;
        Ok(())
    }

    /// Swaps the sprite image; to be used when the player turns and faces a
    /// new direction.
    pub fn align_player_sprite(&self, player: &Player) -> Result<(), UiError> {
        self.surface
            .set_root_property("--player-sprite", &format!("url('{}')", sprite_url(player)))
    }

    pub fn update_player_lifes(&self, player: &Player) -> Result<(), UiError> {
        self.surface.lifes.set_inner_html("");
        for _ in 0..player.lifes {
            let heart = self.document.create_element("div")?;
            self.surface.lifes.append_child(&heart)?;
        }
        Ok(())
    }

    // ---------------- Dice commands ----------------

    /// Registers a command icon template under `name`; displayed icons are
    /// deep clones, so the template itself is never mutated.
    pub fn add_icon(&mut self, name: &str, filename: &str) -> Result<(), UiError> {
        let icon = self.document.create_element("div")?;
        icon.class_list().add_1("icon")?;
        let image = self.document.create_element("img")?;
        image.set_attribute("src", &format!("{ICON_PATH}/{filename}"))?;
        icon.append_child(&image)?;
        self.icons.insert(name.to_string(), icon);
        Ok(())
    }

    /// Displays one clickable icon per rolled command. Clicking an icon
    /// marks it chosen and hands the command back through `choose_command`;
    /// the icon stays clickable while displayed, so repeated clicks repeat
    /// the callback. Commands without a registered icon are skipped.
    pub fn show_dice_results(
        &mut self,
        commands: &[Command],
        choose_command: Rc<dyn Fn(Command)>,
    ) -> Result<(), UiError> {
        // Clear out both containers before adding the new dice results.
        self.update_chosen_dice_results(&[])?;
        self.surface.dice_results.set_inner_html("");
        self.dice_closures.clear();

        for command in commands {
            let Some(template) = self.icons.get(&command.name) else {
                continue;
            };
            let node: Element = template
                .clone_node_with_deep(true)?
                .dyn_into()
                .map_err(|_| UiError::Dom("icon clone is not an element".to_string()))?;
            let on_click = {
                let choose_command = choose_command.clone();
                let command = command.clone();
                let node = node.clone();
                Closure::wrap(Box::new(move || {
                    choose_command(command.clone());
                    let _ = node.class_list().add_1("chosen");
                }) as Box<dyn FnMut()>)
            };
            node.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            self.dice_closures.push(on_click);
            self.surface.dice_results.append_child(&node)?;
        }
        Ok(())
    }

    /// Renders the chosen commands and pads with empty placeholder icons so
    /// the display always occupies exactly `CHOSEN_SLOTS` slots.
    pub fn update_chosen_dice_results(&self, commands: &[Command]) -> Result<(), UiError> {
        self.surface.dice_chosen.set_inner_html("");
        for command in commands {
            let Some(template) = self.icons.get(&command.name) else {
                continue;
            };
            let node: Element = template
                .clone_node_with_deep(true)?
                .dyn_into()
                .map_err(|_| UiError::Dom("icon clone is not an element".to_string()))?;
            node.class_list().add_1("chosen")?;
            self.surface.dice_chosen.append_child(&node)?;
        }
        for _ in commands.len()..CHOSEN_SLOTS {
            let placeholder = self.document.create_element("div")?;
            placeholder.class_list().add_1("icon")?;
            self.surface.dice_chosen.append_child(&placeholder)?;
        }
        Ok(())
    }

    // ---------------- Dialogs ----------------

    /// Registers the dialog element with the given id under `name`. An id
    /// that resolves to nothing (or to a non-dialog element) is ignored,
    /// which in turn makes show/hide for that name no-ops.
    pub fn add_dialog(&mut self, name: &str, element_id: &str) {
        let Some(dialog) = self
            .document
            .get_element_by_id(element_id)
            .and_then(|element| element.dyn_into::<HtmlDialogElement>().ok())
        else {
            return;
        };
        self.dialogs.insert(name.to_string(), dialog);
    }

    pub fn show_dialog(&self, name: &str) {
        if let Some(dialog) = self.dialogs.get(name) {
            let _ = dialog.show_modal();
        }
    }

    pub fn hide_dialog(&self, name: &str) {
        if let Some(dialog) = self.dialogs.get(name) {
            dialog.close();
        }
    }

    // ---------------- Misc ----------------

    /// Empties the dice displays and the board container, ready for a fresh
    /// round.
    pub fn reset_ui(&mut self) {
        clog("resetting ui");
        self.surface.dice_results.set_inner_html("");
        self.surface.dice_chosen.set_inner_html("");
        self.surface.board_container.set_inner_html("");
        self.tiles.clear();
        self.dice_closures.clear();
        self.geometry.set(None);
    }

    pub fn show_dev_tools(&self) -> Result<(), UiError> {
        self.surface.set_root_property("--dev-display", "block")
    }
}

impl Drop for UiController {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            "resize",
            self.resize_listener.as_ref().unchecked_ref(),
        );
        self.detach_title_listeners();
    }
}

fn sprite_url(player: &Player) -> String {
    format!(
        "{PLAYER_IMAGE_PATH}/{}-{}.png",
        player.sprite,
        player.facing_direction.as_str()
    )
}

fn apply_tile_size(
    window: &Window,
    root: &HtmlElement,
    nav: &Element,
    geometry: GridGeometry,
) -> Result<(), UiError> {
    let viewport_width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let viewport_height = window.inner_height()?.as_f64().unwrap_or(0.0);
    let nav_height = nav.client_height() as f64;
    let size = layout::tile_size(viewport_width, viewport_height, nav_height, geometry);
    root.style().set_property("--tile-size", &format!("{size}px"))?;
    Ok(())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::RefCell;

    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
    use web_sys::KeyboardEventInit;

    use super::*;
    use crate::model::{Direction, Location, Terrain};

    wasm_bindgen_test_configure!(run_in_browser);

    const SURFACE_IDS: [&str; 7] = [
        "game-board-container",
        "game-dice-results",
        "game-dice-chosen",
        "lifes",
        "game-lifes",
        "title-scene",
        "game-player-info",
    ];

    /// Rebuilds the static surface in the test document, replacing any
    /// leftovers from a previous test.
    fn install_surface(document: &Document) {
        for id in SURFACE_IDS {
            if let Some(element) = document.get_element_by_id(id) {
                element.remove();
            }
        }
        if let Some(element) = document.get_element_by_id("player") {
            element.remove();
        }
        if let Some(nav) = document.query_selector("nav").unwrap() {
            nav.remove();
        }
        let body = document.body().unwrap();
        for id in SURFACE_IDS {
            let element = document.create_element("div").unwrap();
            element.set_id(id);
            body.append_child(&element).unwrap();
        }
        let nav = document.create_element("nav").unwrap();
        body.append_child(&nav).unwrap();
    }

    fn controller() -> UiController {
        let document = web_sys::window().unwrap().document().unwrap();
        install_surface(&document);
        let surface = UiSurface::from_document(&document).unwrap();
        UiController::new(surface).unwrap()
    }

    fn player_at(row: u32, column: u32) -> Player {
        Player {
            location: Location { row, column },
            facing_direction: Direction::Up,
            sprite: "robot".to_string(),
            lifes: 3,
        }
    }

    #[wasm_bindgen_test]
    fn missing_surface_element_fails_loudly() {
        let document = web_sys::window().unwrap().document().unwrap();
        install_surface(&document);
        document
            .get_element_by_id("game-board-container")
            .unwrap()
            .remove();
        let error = UiSurface::from_document(&document).unwrap_err();
        assert!(matches!(
            error,
            UiError::MissingElement("game-board-container")
        ));
    }

    #[wasm_bindgen_test]
    fn setup_new_map_builds_tagged_grid_flag_and_player() {
        let mut ui = controller();
        let mut board = GameBoard::new(3, 4, Location { row: 1, column: 2 });
        board.set_terrain(Location { row: 0, column: 3 }, Terrain::Pit);
        let player = player_at(2, 3);
        ui.setup_new_map(&board, &player).unwrap();

        let document = web_sys::window().unwrap().document().unwrap();
        let tiles = ui
            .surface
            .board_container
            .query_selector_all(".grid-row > .tile")
            .unwrap();
        assert_eq!(tiles.length(), 12);

        let flag = document.get_element_by_id("flag").unwrap();
        assert_eq!(flag.get_attribute("row").unwrap(), "1");
        assert_eq!(flag.get_attribute("column").unwrap(), "2");

        let pit = document
            .query_selector("[row='0'][column='3']")
            .unwrap()
            .unwrap();
        assert!(pit.class_list().contains("pit"));

        let player_node = document.get_element_by_id("player").unwrap();
        let parent = player_node.parent_element().unwrap();
        assert_eq!(parent.get_attribute("row").unwrap(), "2");
        assert_eq!(parent.get_attribute("column").unwrap(), "3");

        let hearts = ui.surface.lifes.child_element_count();
        assert_eq!(hearts, 3);

        let tile_size = ui
            .surface
            .root
            .style()
            .get_property_value("--tile-size")
            .unwrap();
        assert!(tile_size.ends_with("px"));
    }

    #[wasm_bindgen_test]
    fn moving_the_player_reparents_the_same_node() {
        let mut ui = controller();
        let board = GameBoard::new(2, 2, Location { row: 0, column: 1 });
        let mut player = player_at(0, 0);
        ui.setup_new_map(&board, &player).unwrap();

        player.location = Location { row: 1, column: 1 };
        ui.move_player_sprite(&player).unwrap();

        let document = web_sys::window().unwrap().document().unwrap();
        let nodes = document.query_selector_all("#player").unwrap();
        assert_eq!(nodes.length(), 1);
        let parent = document
            .get_element_by_id("player")
            .unwrap()
            .parent_element()
            .unwrap();
        assert_eq!(parent.get_attribute("row").unwrap(), "1");
        assert_eq!(parent.get_attribute("column").unwrap(), "1");
    }

    #[wasm_bindgen_test]
    fn draw_board_rejects_a_stale_grid_before_painting() {
        let mut ui = controller();
        let first = GameBoard::new(3, 4, Location { row: 0, column: 0 });
        ui.setup_new_map(&first, &player_at(0, 0)).unwrap();

        let mut second = GameBoard::new(5, 5, Location { row: 4, column: 4 });
        second.set_terrain(Location { row: 0, column: 0 }, Terrain::Wall);
        let error = ui.draw_board(&second).unwrap_err();
        assert!(matches!(
            error,
            UiError::GridMismatch {
                expected: 25,
                found: 12
            }
        ));

        // The stale tiles kept their old classes: nothing was painted.
        let document = web_sys::window().unwrap().document().unwrap();
        let first_tile = document
            .query_selector("[row='0'][column='0']")
            .unwrap()
            .unwrap();
        assert!(!first_tile.class_list().contains("wall"));
    }

    #[wasm_bindgen_test]
    fn chosen_display_always_occupies_three_slots() {
        let mut ui = controller();
        ui.add_icon("forward", "forward.png").unwrap();
        ui.add_icon("turn-left", "turn-left.png").unwrap();

        ui.update_chosen_dice_results(&[Command::new("forward"), Command::new("turn-left")])
            .unwrap();

        let chosen = &ui.surface.dice_chosen;
        assert_eq!(chosen.child_element_count(), 3);
        let children = chosen.children();
        assert!(children.item(0).unwrap().class_list().contains("chosen"));
        assert!(children.item(1).unwrap().class_list().contains("chosen"));
        let placeholder = children.item(2).unwrap();
        assert!(placeholder.class_list().contains("icon"));
        assert!(!placeholder.class_list().contains("chosen"));
        assert_eq!(placeholder.child_element_count(), 0);
    }

    #[wasm_bindgen_test]
    fn clicking_a_dice_icon_invokes_the_callback_and_marks_it_chosen() {
        let mut ui = controller();
        ui.add_icon("forward", "forward.png").unwrap();
        ui.add_icon("backward", "backward.png").unwrap();

        let picked: Rc<RefCell<Vec<Command>>> = Rc::new(RefCell::new(Vec::new()));
        let choose: Rc<dyn Fn(Command)> = {
            let picked = picked.clone();
            Rc::new(move |command| picked.borrow_mut().push(command))
        };
        ui.show_dice_results(
            &[Command::new("forward"), Command::new("backward")],
            choose,
        )
        .unwrap();

        let results = &ui.surface.dice_results;
        assert_eq!(results.child_element_count(), 2);

        let second = results
            .children()
            .item(1)
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        second.click();

        assert_eq!(picked.borrow().as_slice(), &[Command::new("backward")]);
        assert!(second.class_list().contains("chosen"));
    }

    #[wasm_bindgen_test]
    fn commands_without_an_icon_are_skipped() {
        let mut ui = controller();
        ui.add_icon("forward", "forward.png").unwrap();
        let choose: Rc<dyn Fn(Command)> = Rc::new(|_| {});
        ui.show_dice_results(
            &[Command::new("forward"), Command::new("never-registered")],
            choose,
        )
        .unwrap();
        assert_eq!(ui.surface.dice_results.child_element_count(), 1);
    }

    #[wasm_bindgen_test]
    fn dialogs_round_trip_and_ignore_unknown_names() {
        let mut ui = controller();
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(stale) = document.get_element_by_id("test-dialog") {
            stale.remove();
        }
        let dialog: HtmlDialogElement = document
            .create_element("dialog")
            .unwrap()
            .dyn_into()
            .unwrap();
        dialog.set_id("test-dialog");
        document.body().unwrap().append_child(&dialog).unwrap();

        ui.add_dialog("pause", "test-dialog");
        ui.add_dialog("ghost", "no-such-element");

        ui.show_dialog("pause");
        assert!(dialog.open());
        ui.hide_dialog("pause");
        assert!(!dialog.open());

        // Unknown or unresolved names never throw.
        ui.show_dialog("ghost");
        ui.hide_dialog("ghost");
        ui.show_dialog("never-added");
    }

    #[wasm_bindgen_test]
    fn title_scene_listeners_die_with_the_scene() {
        let mut ui = controller();
        let starts = Rc::new(Cell::new(0u32));
        let on_start: Rc<dyn Fn()> = {
            let starts = starts.clone();
            Rc::new(move || starts.set(starts.get() + 1))
        };
        ui.display_title_scene(on_start).unwrap();

        let window = web_sys::window().unwrap();
        let space = || {
            let init = KeyboardEventInit::new();
            init.set_code("Space");
            KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap()
        };
        window.dispatch_event(&space()).unwrap();
        assert_eq!(starts.get(), 1);

        // Other keys are ignored.
        let other = KeyboardEvent::new("keydown").unwrap();
        window.dispatch_event(&other).unwrap();
        assert_eq!(starts.get(), 1);

        ui.display_game_scene().unwrap();
        window.dispatch_event(&space()).unwrap();
        assert_eq!(starts.get(), 1);

        // Re-entering arms exactly one listener pair.
        let on_start: Rc<dyn Fn()> = {
            let starts = starts.clone();
            Rc::new(move || starts.set(starts.get() + 1))
        };
        ui.display_title_scene(on_start.clone()).unwrap();
        ui.display_title_scene(on_start).unwrap();
        window.dispatch_event(&space()).unwrap();
        assert_eq!(starts.get(), 2);
    }

    #[wasm_bindgen_test]
    fn window_resize_recomputes_tile_size() {
        let mut ui = controller();
        let board = GameBoard::new(2, 3, Location { row: 0, column: 0 });
        ui.setup_new_map(&board, &player_at(0, 0)).unwrap();

        ui.surface
            .root
            .style()
            .set_property("--tile-size", "1px")
            .unwrap();
        let window = web_sys::window().unwrap();
        let resize = web_sys::Event::new("resize").unwrap();
        window.dispatch_event(&resize).unwrap();

        let recomputed = ui
            .surface
            .root
            .style()
            .get_property_value("--tile-size")
            .unwrap();
        assert_ne!(recomputed, "1px");
        assert!(recomputed.ends_with("px"));
    }

    #[wasm_bindgen_test]
    fn dev_tools_flip_the_dev_display_property() {
        let ui = controller();
        ui.show_dev_tools().unwrap();
        let value = ui
            .surface
            .root
            .style()
            .get_property_value("--dev-display")
            .unwrap();
        assert_eq!(value, "block");
    }

    #[wasm_bindgen_test]
    fn reset_ui_clears_grid_and_dice_state() {
        let mut ui = controller();
        ui.add_icon("forward", "forward.png").unwrap();
        let board = GameBoard::new(2, 3, Location { row: 0, column: 0 });
        ui.setup_new_map(&board, &player_at(0, 0)).unwrap();
        ui.update_chosen_dice_results(&[Command::new("forward")])
            .unwrap();

        ui.reset_ui();
        assert_eq!(ui.surface.board_container.child_element_count(), 0);
        assert_eq!(ui.surface.dice_results.child_element_count(), 0);
        assert_eq!(ui.surface.dice_chosen.child_element_count(), 0);

        // A fresh grid for the same board is accepted again afterwards.
        ui.generate_grid(board.dimension()).unwrap();
        ui.draw_board(&board).unwrap();
    }
}
