use crate::models::Button;

/// Process-wide settings, read once before the first frame is created.
pub trait Config {
    fn create_list_of_tag_labels(&self) -> Vec<String>;

    /// Height of the title bar above each client. Zero disables bars.
    fn bar_height(&self) -> i32;
    fn focused_bar_color(&self) -> String;
    fn unfocused_bar_color(&self) -> String;
    fn title_color(&self) -> String;
    fn center_title(&self) -> bool;
    /// Horizontal offset of a title that is not centred.
    fn title_offset(&self) -> i32;

    fn focus_new_windows(&self) -> bool;
    /// Size used when a new client's geometry cannot be queried.
    fn default_width(&self) -> i32;
    fn default_height(&self) -> i32;

    fn move_button(&self) -> Button;
    fn resize_button(&self) -> Button;
    fn close_button(&self) -> Button;
}


#[cfg(test)]
pub(crate) use tests::TestConfig;
