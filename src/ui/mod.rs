/// UI layer: side panel / top bar widgets, map tiles, charts, data table.
pub mod charts;
pub mod map;
pub mod panels;
pub mod table;
