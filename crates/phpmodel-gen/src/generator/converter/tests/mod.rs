mod dictionary;
mod objects;
