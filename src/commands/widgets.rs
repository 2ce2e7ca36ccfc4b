use anyhow::Result;
use meow_content::food::FOOD_CATALOG;
use meow_content::{suggest_food, suggest_food_in, FoodCategory};

use crate::render;

pub fn food(category: Option<&str>) -> Result<()> {
    let mut rng = rand::thread_rng();
    let pick = match category {
        Some(label) => {
            let category = FoodCategory::from_label(label).ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown food category '{}'. Try one of: {}",
                    label,
                    FoodCategory::ALL.map(|c| c.label()).join(", ")
                )
            })?;
            suggest_food_in(category, &mut rng)
        }
        None => suggest_food(&mut rng),
    };

    match pick {
        Some(option) => println!("{}", render::food(&option)),
        None => println!("The dachshund is asleep. ({} dishes on the menu)", FOOD_CATALOG.len()),
    }
    Ok(())
}

pub fn wisdom() -> Result<()> {
    let answer = meow_content::wisdom::ask(&mut rand::thread_rng());
    println!("{}", render::wisdom(answer));
    Ok(())
}
