mod escape_round_trip;
mod fixtures;
