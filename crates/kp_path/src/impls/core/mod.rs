mod array;
mod option;
mod primitive;
mod tuple;
