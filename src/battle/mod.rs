pub mod ai;
pub mod engine;
pub mod intent;
pub mod result;
pub mod stats;
pub mod type_chart;

#[cfg(test)]
mod test_flee;
#[cfg(test)]
mod test_item_usage;
#[cfg(test)]
mod test_turn_order;
