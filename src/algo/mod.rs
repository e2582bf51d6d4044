/*!
# Graph Algorithms

This module provides the algorithms built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversal, connectivity and shortest paths.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod connectivity;
mod dijkstra;
mod traversal;

use crate::{error::*, prelude::*};

pub use connectivity::*;
pub use dijkstra::*;
pub use traversal::*;
