mod arena;
mod balance;
mod handle;
mod iter;
mod node;
mod raw_wbtree;
mod rotate;
mod search;
#[cfg(test)]
mod testing;

pub(crate) use iter::InOrder;
pub(crate) use raw_wbtree::RawWbTree;
pub use search::NodeRef;
