pub mod supernotes;
