use crate::error::Result;
use helium_core::models::Direction;
use x11rb::{
    cursor::Handle as CursorHandle, protocol::xproto, resource_manager::Database,
    rust_connection::RustConnection,
};

#[derive(Clone, Debug)]
pub struct XCursor {
    pub normal: xproto::Cursor,
    pub move_: xproto::Cursor,
    pub resize_north: xproto::Cursor,
    pub resize_south: xproto::Cursor,
    pub resize_east: xproto::Cursor,
    pub resize_west: xproto::Cursor,
}

// Cursors
const CURSOR_NORMAL: &str = "left_ptr";
const CURSOR_MOVE: &str = "fleur";
const CURSOR_NORTH: &str = "top_side";
const CURSOR_SOUTH: &str = "bottom_side";
const CURSOR_EAST: &str = "right_side";
const CURSOR_WEST: &str = "left_side";

impl XCursor {
    pub(crate) fn new(conn: &RustConnection, display: usize, db: &Database) -> Result<Self> {
        let handle = CursorHandle::new(conn, display, db)?.reply()?;
        Ok(Self {
            normal: handle.load_cursor(conn, CURSOR_NORMAL)?,
            move_: handle.load_cursor(conn, CURSOR_MOVE)?,
            resize_north: handle.load_cursor(conn, CURSOR_NORTH)?,
            resize_south: handle.load_cursor(conn, CURSOR_SOUTH)?,
            resize_east: handle.load_cursor(conn, CURSOR_EAST)?,
            resize_west: handle.load_cursor(conn, CURSOR_WEST)?,
        })
    }

    /// The cursor shown while dragging the given edge.
    pub const fn resize(&self, direction: Direction) -> xproto::Cursor {
        match direction {
            Direction::North => self.resize_north,
            Direction::South => self.resize_south,
            Direction::East => self.resize_east,
            Direction::West => self.resize_west,
            Direction::None => self.normal,
        }
    }
}
