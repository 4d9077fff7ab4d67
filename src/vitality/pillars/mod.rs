mod activity;
mod breed_age;
mod nutrition;
mod preventive;
mod weight;

pub(crate) use activity::score_activity;
pub(crate) use breed_age::score_breed_age;
pub(crate) use nutrition::score_nutrition;
pub(crate) use preventive::score_preventive;
pub(crate) use weight::score_weight;
