pub mod d001_query_dashboard;
