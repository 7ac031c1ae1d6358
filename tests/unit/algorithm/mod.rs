mod bitset;
mod cache;
mod propagation;
