use std::{collections::HashMap, fmt};

use sheetpack::{InputItem, PackError, Packer};

use crate::icon::Icon;

/// Icons placed on a shared canvas, in placement order.
#[derive(Clone)]
pub struct Sheet {
    pub icons: Vec<Icon>,
    pub width: u32,
    pub height: u32,
}

impl Sheet {
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl fmt::Debug for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = String::new();
        for icon in &self.icons {
            lines.push_str(&format!(
                "\t{}: ({}, {}) ({}, {})\n",
                icon.name,
                icon.x,
                icon.y,
                icon.x + icon.width,
                icon.y + icon.height
            ));
        }

        write!(
            f,
            "Dimensions: ({}, {})\nIcons:\n{}",
            self.width, self.height, lines
        )
    }
}

/// Assigns every icon a position using `packer` and returns them in the order
/// the packer placed them.
pub fn layout<P: Packer + ?Sized>(icons: Vec<Icon>, packer: &P) -> Result<Sheet, PackError> {
    let mut inputs = Vec::with_capacity(icons.len());
    let mut pending = HashMap::with_capacity(icons.len());

    for icon in icons {
        let input = InputItem::new((icon.width, icon.height), icon.name.to_string());
        pending.insert(input.id(), icon);
        inputs.push(input);
    }

    let output = packer.pack(inputs)?;
    let (width, height) = output.size();

    let placed: Vec<Icon> = output
        .into_items()
        .into_iter()
        .map(|item| {
            let mut icon = match pending.remove(&item.id()) {
                Some(icon) => icon,
                None => panic!("packer placed item {:?} more than once", item.id()),
            };

            let (x, y) = item.position();
            icon.x = x;
            icon.y = y;

            log::info!("{}, x={}, y={}", icon.name, icon.x, icon.y);

            icon
        })
        .collect();

    assert!(
        pending.is_empty(),
        "packer did not place {} icon(s)",
        pending.len()
    );

    log::info!("MaxWidth={}, TotalHeight={}", width, height);

    Ok(Sheet {
        icons: placed,
        width,
        height,
    })
}
