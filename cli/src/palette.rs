use crate::error::Result;
use crate::render::render_palette;
use crate::ui;

pub fn execute(no_color: bool) -> Result<()> {
    ui::set_color(!no_color);
    ui::section_header("Category colors");
    println!("{}", render_palette(!no_color));
    Ok(())
}
