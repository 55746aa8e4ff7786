use crate::error::Result;
use crate::render::render_status_codes;
use crate::ui;

pub fn execute(codes: Vec<u16>, no_color: bool) -> Result<()> {
    ui::set_color(!no_color);
    println!("{}", render_status_codes(&codes, !no_color));
    Ok(())
}
