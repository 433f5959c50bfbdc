use std::collections::{HashMap, HashSet};

use novawm_core::types::{Direction, Point, Rect, Size};
use tracing::debug;

use crate::actions::ClassActions;
use crate::category_map::CategoryMultimap;
use crate::changes::{Change, ChangeLog};
use crate::screens::{ScreenTopology, TopologyError};

use super::types::{Desktop, InitialState, Layer, ModelConfig, ScaleMode, WindowId, DEF_LAYER};

/// The window-management policy state: which windows exist, where they live,
/// how they stack, and which one has the focus.
///
/// Every mutator validates its preconditions first. A rejected call changes
/// nothing and queues nothing; an accepted one updates the state and queues
/// the resulting [`Change`] records on [`ClientModel::changes_mut`].
///
/// All mutators take `&mut self`: the model is single-writer, and an
/// integration layer that dispatches from several threads must wrap it in a
/// single lock of its own.
#[derive(Debug)]
pub struct ClientModel {
    max_desktops: u32,
    current_desktop: Desktop,
    desktops: CategoryMultimap<Desktop, WindowId>,
    layers: CategoryMultimap<Layer, WindowId>,
    locations: HashMap<WindowId, Point>,
    sizes: HashMap<WindowId, Size>,
    modes: HashMap<WindowId, ScaleMode>,
    /// `None` means the window is off every monitor.
    screens: HashMap<WindowId, Option<Rect>>,
    autofocus: HashSet<WindowId>,
    was_stuck: HashSet<WindowId>,
    focused: Option<WindowId>,
    /// One LIFO stack per user desktop index; the top is the last element.
    focus_history: HashMap<u32, Vec<WindowId>>,
    topology: ScreenTopology,
    changes: ChangeLog,
}

impl ClientModel {
    pub fn new(config: ModelConfig) -> Self {
        let max_desktops = config.max_desktops.max(1);
        let desktop_categories = (0..max_desktops)
            .map(Desktop::User)
            .chain([Desktop::All, Desktop::Icon, Desktop::Moving, Desktop::Resizing]);

        Self {
            max_desktops,
            current_desktop: Desktop::User(0),
            desktops: CategoryMultimap::with_categories(desktop_categories),
            layers: CategoryMultimap::with_categories(Layer::all()),
            locations: HashMap::new(),
            sizes: HashMap::new(),
            modes: HashMap::new(),
            screens: HashMap::new(),
            autofocus: HashSet::new(),
            was_stuck: HashSet::new(),
            focused: None,
            focus_history: HashMap::new(),
            topology: ScreenTopology::new(),
            changes: ChangeLog::new(),
        }
    }

    // --- Queries ---

    pub fn max_desktops(&self) -> u32 {
        self.max_desktops
    }

    /// The selected user desktop; always a [`Desktop::User`].
    pub fn current_desktop(&self) -> Desktop {
        self.current_desktop
    }

    pub fn is_client(&self, window: WindowId) -> bool {
        self.desktops.is_member(&window)
    }

    /// A window is visible iff it is stuck or on the current user desktop.
    pub fn is_visible(&self, window: WindowId) -> bool {
        match self.desktops.category_of(&window) {
            Some(Desktop::All) => true,
            Some(desktop) => desktop == self.current_desktop,
            None => false,
        }
    }

    pub fn get_desktop(&self, window: WindowId) -> Option<Desktop> {
        self.desktops.category_of(&window)
    }

    pub fn get_layer(&self, window: WindowId) -> Option<Layer> {
        self.layers.category_of(&window)
    }

    pub fn get_location(&self, window: WindowId) -> Option<Point> {
        self.locations.get(&window).copied()
    }

    pub fn get_size(&self, window: WindowId) -> Option<Size> {
        self.sizes.get(&window).copied()
    }

    pub fn get_mode(&self, window: WindowId) -> Option<ScaleMode> {
        self.modes.get(&window).copied()
    }

    /// Bounds of the monitor the window is on; `None` for unknown windows
    /// and for windows outside every monitor.
    pub fn get_screen(&self, window: WindowId) -> Option<Rect> {
        self.screens.get(&window).copied().flatten()
    }

    pub fn is_autofocusable(&self, window: WindowId) -> bool {
        self.autofocus.contains(&window)
    }

    pub fn get_focused(&self) -> Option<WindowId> {
        self.focused
    }

    /// Every managed window, ordered by id.
    pub fn get_clients(&self) -> Vec<WindowId> {
        let mut clients: Vec<WindowId> = self.desktops.iter().map(|(window, _)| window).collect();
        clients.sort_unstable();
        clients
    }

    /// Windows in `desktop`, ordered by id.
    pub fn get_clients_of(&self, desktop: Desktop) -> Vec<WindowId> {
        let mut clients: Vec<WindowId> = self.desktops.members_of(&desktop).collect();
        clients.sort_unstable();
        clients
    }

    /// Windows on the current desktop plus stuck windows, ordered by id.
    pub fn get_visible_clients(&self) -> Vec<WindowId> {
        let mut clients: Vec<WindowId> = self
            .desktops
            .members_of(&self.current_desktop)
            .chain(self.desktops.members_of(&Desktop::All))
            .collect();
        clients.sort_unstable();
        clients
    }

    /// Visible windows from the bottom of the stack to the top: lower layers
    /// first, ties broken by id.
    pub fn get_visible_stacking_order(&self) -> Vec<WindowId> {
        let mut clients = self.get_visible_clients();
        clients.sort_by_key(|window| (self.get_layer(*window), *window));
        clients
    }

    pub fn screens(&self) -> &ScreenTopology {
        &self.topology
    }

    pub fn changes(&self) -> &ChangeLog {
        &self.changes
    }

    pub fn changes_mut(&mut self) -> &mut ChangeLog {
        &mut self.changes
    }

    // --- Lifecycle ---

    /// Starts managing `window` on the current desktop (or iconified), at
    /// [`DEF_LAYER`] and [`ScaleMode::Floating`]. Geometry and monitor are
    /// recorded without emitting changes. Autofocus windows are focused
    /// right away when visible.
    pub fn add_client(
        &mut self,
        window: WindowId,
        initial: InitialState,
        location: Point,
        size: Size,
        autofocus: bool,
    ) {
        if self.is_client(window) {
            debug!("Ignoring add of {}: already managed.", window);
            return;
        }
        if size.is_empty() {
            debug!("Ignoring add of {}: invalid size {:?}.", window, size);
            return;
        }

        let desktop = match initial {
            InitialState::Visible => self.current_desktop,
            InitialState::Iconified => Desktop::Icon,
        };
        if let Err(e) = self.desktops.add_member(desktop, window) {
            debug!("Ignoring add of {}: {}", window, e);
            return;
        }
        if let Err(e) = self.layers.add_member(DEF_LAYER, window) {
            debug!("Ignoring add of {}: {}", window, e);
            let _ = self.desktops.remove_member(window);
            return;
        }

        self.locations.insert(window, location);
        self.sizes.insert(window, size);
        self.modes.insert(window, ScaleMode::Floating);
        self.screens.insert(window, self.topology.box_of_point(location));
        if autofocus {
            self.autofocus.insert(window);
        }

        self.changes.push(Change::ClientDesktopChanged {
            window,
            prev: None,
            next: desktop,
        });
        self.changes.push(Change::LayerChanged {
            window,
            layer: DEF_LAYER,
        });

        if autofocus {
            self.focus(window);
        }
    }

    /// Stops managing `window`. A focused window is unfocused first, so the
    /// `FocusChanged` record precedes `Destroyed`.
    pub fn remove_client(&mut self, window: WindowId) {
        let Some(last_desktop) = self.desktops.category_of(&window) else {
            debug!("Ignoring removal of unknown window {}.", window);
            return;
        };
        let last_layer = self.layers.category_of(&window).unwrap_or(DEF_LAYER);

        self.unfocus_if_focused(window);

        let _ = self.desktops.remove_member(window);
        let _ = self.layers.remove_member(window);
        self.locations.remove(&window);
        self.sizes.remove(&window);
        self.modes.remove(&window);
        self.screens.remove(&window);
        self.autofocus.remove(&window);
        self.was_stuck.remove(&window);

        self.changes.push(Change::Destroyed {
            window,
            last_desktop,
            last_layer,
        });
    }

    /// Records that the window was unmapped by its owner. The window stays
    /// managed but loses the focus.
    pub fn unmap_client(&mut self, window: WindowId) {
        if !self.is_client(window) {
            return;
        }
        self.unfocus_if_focused(window);
        self.changes.push(Change::Unmapped { window });
    }

    // --- Focus ---

    /// Focuses a visible, autofocus-eligible window; anything else is ignored.
    pub fn focus(&mut self, window: WindowId) {
        if !self.autofocus.contains(&window) {
            debug!("Not focusing {}: autofocus is disabled for it.", window);
            return;
        }
        self.force_focus(window);
    }

    /// Focuses a visible window regardless of its autofocus flag.
    pub fn force_focus(&mut self, window: WindowId) {
        if !self.is_visible(window) {
            debug!("Not focusing {}: it is not visible.", window);
            return;
        }

        self.push_focus_history(window);
        if self.focused == Some(window) {
            return;
        }
        let prev = self.focused.replace(window);
        self.changes.push(Change::FocusChanged {
            prev,
            next: Some(window),
        });
    }

    pub fn unfocus(&mut self) {
        if let Some(prev) = self.focused.take() {
            self.changes.push(Change::FocusChanged {
                prev: Some(prev),
                next: None,
            });
        }
    }

    pub fn unfocus_if_focused(&mut self, window: WindowId) {
        if self.focused == Some(window) {
            self.unfocus();
        }
    }

    /// Pops the current desktop's focus history until an entry that is
    /// still managed and visible turns up. Stale entries are discarded.
    pub fn get_next_in_focus_history(&mut self) -> Option<WindowId> {
        let index = self.current_desktop.user_index()?;
        loop {
            let candidate = self.focus_history.get_mut(&index)?.pop()?;
            if self.is_client(candidate) && self.is_visible(candidate) {
                return Some(candidate);
            }
        }
    }

    fn push_focus_history(&mut self, window: WindowId) {
        let Some(index) = self.current_desktop.user_index() else {
            return;
        };
        let history = self.focus_history.entry(index).or_default();
        history.retain(|entry| *entry != window);
        history.push(window);
    }

    // --- Desktops ---

    /// Moves `window` into `new_desktop`, emitting one `ClientDesktopChanged`.
    /// With `unfocus_if_hidden`, a window that is no longer visible also
    /// loses the focus (recorded before the desktop change). Returns whether
    /// anything moved.
    pub fn move_to_desktop(&mut self, window: WindowId, new_desktop: Desktop, unfocus_if_hidden: bool) -> bool {
        let Some(old_desktop) = self.desktops.category_of(&window) else {
            return false;
        };
        if old_desktop == new_desktop {
            return false;
        }
        if let Err(e) = self.desktops.move_member(window, new_desktop) {
            debug!("Cannot move {} to {}: {}", window, new_desktop, e);
            return false;
        }

        if unfocus_if_hidden && !self.is_visible(window) {
            self.unfocus_if_focused(window);
        }
        self.changes.push(Change::ClientDesktopChanged {
            window,
            prev: Some(old_desktop),
            next: new_desktop,
        });
        true
    }

    fn user_desktop_after(&self, index: u32, offset: u32) -> Desktop {
        let next = (index as u64 + offset as u64) % self.max_desktops as u64;
        Desktop::User(next as u32)
    }

    /// Where a window returning from the icon, moving or resizing bucket lands.
    fn restore_destination(&self, window: WindowId) -> Desktop {
        if self.was_stuck.contains(&window) {
            Desktop::All
        } else {
            self.current_desktop
        }
    }

    fn remember_stuck(&mut self, window: WindowId) {
        if self.get_desktop(window) == Some(Desktop::All) {
            self.was_stuck.insert(window);
        } else {
            self.was_stuck.remove(&window);
        }
    }

    fn interaction_in_progress(&self) -> bool {
        self.desktops.count_of(&Desktop::Moving) > 0 || self.desktops.count_of(&Desktop::Resizing) > 0
    }

    pub fn client_next_desktop(&mut self, window: WindowId) {
        self.shift_client_desktop(window, 1);
    }

    pub fn client_prev_desktop(&mut self, window: WindowId) {
        self.shift_client_desktop(window, self.max_desktops - 1);
    }

    fn shift_client_desktop(&mut self, window: WindowId, offset: u32) {
        let Some(Desktop::User(index)) = self.get_desktop(window) else {
            debug!("Not shifting {}: it is not on a user desktop.", window);
            return;
        };
        let target = self.user_desktop_after(index, offset);
        self.move_to_desktop(window, target, true);
    }

    /// Sticks a window on the current desktop, or unsticks a stuck one onto
    /// the current desktop.
    pub fn toggle_stick(&mut self, window: WindowId) {
        if !self.is_visible(window) {
            return;
        }
        match self.get_desktop(window) {
            Some(Desktop::All) => {
                let current = self.current_desktop;
                self.move_to_desktop(window, current, true);
            }
            Some(Desktop::User(_)) => {
                self.move_to_desktop(window, Desktop::All, true);
            }
            _ => {}
        }
    }

    pub fn iconify(&mut self, window: WindowId) {
        if !self.is_visible(window) {
            debug!("Not iconifying {}: it is not visible.", window);
            return;
        }
        self.remember_stuck(window);
        self.move_to_desktop(window, Desktop::Icon, true);
    }

    /// Restores an iconified window to where it was and focuses it.
    pub fn deiconify(&mut self, window: WindowId) {
        if self.get_desktop(window) != Some(Desktop::Icon) {
            return;
        }
        let destination = self.restore_destination(window);
        self.move_to_desktop(window, destination, true);
        self.focus(window);
    }

    pub fn start_moving(&mut self, window: WindowId) {
        self.start_interaction(window, Desktop::Moving);
    }

    pub fn start_resizing(&mut self, window: WindowId) {
        self.start_interaction(window, Desktop::Resizing);
    }

    fn start_interaction(&mut self, window: WindowId, bucket: Desktop) {
        if !self.is_visible(window) {
            debug!("Not starting {} of {}: it is not visible.", bucket, window);
            return;
        }
        if self.interaction_in_progress() {
            debug!("Not starting {} of {}: another window is being moved or resized.", bucket, window);
            return;
        }
        self.remember_stuck(window);
        self.move_to_desktop(window, bucket, true);
    }

    fn finish_interaction(&mut self, window: WindowId, bucket: Desktop) -> bool {
        if self.get_desktop(window) != Some(bucket) {
            debug!("Not finishing {} of {}: it is not in that state.", bucket, window);
            return false;
        }
        let destination = self.restore_destination(window);
        self.move_to_desktop(window, destination, true)
    }

    /// Ends a drag: restores the desktop, applies the final location, then focuses.
    pub fn stop_moving(&mut self, window: WindowId, location: Point) {
        if self.finish_interaction(window, Desktop::Moving) {
            self.change_location(window, location.x, location.y);
            self.focus(window);
        }
    }

    /// Ends a resize: restores the desktop, applies the final size unless it
    /// is invalid, then focuses.
    pub fn stop_resizing(&mut self, window: WindowId, size: Size) {
        if self.finish_interaction(window, Desktop::Resizing) {
            self.change_size(window, size.width, size.height);
            self.focus(window);
        }
    }

    pub fn next_desktop(&mut self) {
        if let Some(index) = self.current_desktop.user_index() {
            self.set_current_desktop(self.user_desktop_after(index, 1));
        }
    }

    pub fn prev_desktop(&mut self) {
        if let Some(index) = self.current_desktop.user_index() {
            self.set_current_desktop(self.user_desktop_after(index, self.max_desktops - 1));
        }
    }

    /// Jumps straight to user desktop `index`; out-of-range indices are ignored.
    pub fn switch_to_desktop(&mut self, index: u32) {
        if index < self.max_desktops {
            self.set_current_desktop(Desktop::User(index));
        }
    }

    fn set_current_desktop(&mut self, next: Desktop) {
        if self.interaction_in_progress() {
            debug!("Not switching to {}: a window is being moved or resized.", next);
            return;
        }
        if next == self.current_desktop || !next.is_user() {
            return;
        }

        let prev = std::mem::replace(&mut self.current_desktop, next);
        if let Some(focused) = self.focused {
            if !self.is_visible(focused) {
                self.unfocus();
            }
        }
        self.changes.push(Change::CurrentDesktopChanged { prev, next });
    }

    // --- Layers ---

    pub fn up_layer(&mut self, window: WindowId) {
        if let Some(layer) = self.get_layer(window) {
            self.set_layer(window, Layer::clamped(layer.value() as i32 + 1));
        }
    }

    pub fn down_layer(&mut self, window: WindowId) {
        if let Some(layer) = self.get_layer(window) {
            self.set_layer(window, Layer::clamped(layer.value() as i32 - 1));
        }
    }

    pub fn set_layer(&mut self, window: WindowId, layer: Layer) {
        match self.get_layer(window) {
            Some(old) if old != layer => {}
            _ => return,
        }
        if self.layers.move_member(window, layer).is_ok() {
            self.changes.push(Change::LayerChanged { window, layer });
        }
    }

    // --- Geometry and screens ---

    pub fn change_mode(&mut self, window: WindowId, mode: ScaleMode) {
        let Some(stored) = self.modes.get_mut(&window) else {
            return;
        };
        if *stored == mode {
            return;
        }
        *stored = mode;
        self.changes.push(Change::ModeChanged { window, mode });
    }

    /// Records a new location and re-resolves the window's monitor.
    pub fn change_location(&mut self, window: WindowId, x: i32, y: i32) {
        let Some(stored) = self.locations.get_mut(&window) else {
            return;
        };
        let location = Point::new(x, y);
        *stored = location;
        self.changes.push(Change::LocationChanged { window, x, y });

        let new_box = self.topology.box_of_point(location);
        self.set_screen(window, new_box);
    }

    /// Records a new size; zero widths or heights are rejected.
    pub fn change_size(&mut self, window: WindowId, width: u32, height: u32) {
        let size = Size::new(width, height);
        if size.is_empty() {
            debug!("Rejecting size {}x{} for {}.", width, height, window);
            return;
        }
        let Some(stored) = self.sizes.get_mut(&window) else {
            return;
        };
        *stored = size;
        self.changes.push(Change::SizeChanged { window, width, height });
    }

    fn set_screen(&mut self, window: WindowId, new_box: Option<Rect>) {
        let Some(stored) = self.screens.get_mut(&window) else {
            return;
        };
        if *stored == new_box {
            return;
        }
        *stored = new_box;
        self.changes.push(Change::ScreenChanged { window, new_box });
    }

    /// Assigns the window to the monitor next to its current one.
    pub fn to_relative_screen(&mut self, window: WindowId, dir: Direction) {
        let Some(current) = self.get_screen(window) else {
            return;
        };
        let target = self
            .topology
            .screen_of_box(&current)
            .and_then(|id| self.topology.neighbor(id, dir))
            .and_then(|id| self.topology.box_of_screen(id));
        match target {
            Some(target) => self.set_screen(window, Some(target)),
            None => debug!("No monitor {} of {:?} for {}.", dir, current, window),
        }
    }

    /// Assigns the window to the monitor with exactly these bounds.
    pub fn to_screen_box(&mut self, window: WindowId, bounds: Rect) {
        if self.topology.screen_of_box(&bounds).is_none() {
            debug!("No monitor with bounds {:?}.", bounds);
            return;
        }
        self.set_screen(window, Some(bounds));
    }

    /// Rebuilds the monitor topology and re-resolves every window's monitor
    /// from its location. On error nothing changes.
    pub fn update_screens(&mut self, boxes: &[Rect]) -> Result<(), TopologyError> {
        self.topology.rebuild(boxes)?;

        let mut windows: Vec<(WindowId, Point)> = self.locations.iter().map(|(w, p)| (*w, *p)).collect();
        windows.sort_unstable_by_key(|(window, _)| *window);
        for (window, location) in windows {
            let new_box = self.topology.box_of_point(location);
            self.set_screen(window, new_box);
        }
        Ok(())
    }

    // --- Class rules ---

    /// Applies a window class's configured actions, in order.
    pub fn apply_actions(&mut self, window: WindowId, actions: &ClassActions) {
        for action in actions.iter() {
            action.apply_to(self, window);
        }
    }
}
