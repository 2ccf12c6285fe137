use sheetpack::{InputItem, PackError, Packer, VerticalStackPacker};

fn main() -> Result<(), PackError> {
    env_logger::init();

    let inputs: Vec<_> = (0..5)
        .map(|i| InputItem::new((16 * (i + 1), 24), format!("icon-{}", i)))
        .collect();

    let result = VerticalStackPacker::new().pack(inputs)?;

    println!("Pack result: {:#?}", result);

    Ok(())
}
