//! Console message catalog
//!
//! Every line the tool prints (prompts aside) comes from a fixed catalog of
//! messages. Each message belongs to a category, and the category alone decides
//! the color it is rendered with.

pub mod category;
pub mod message;
