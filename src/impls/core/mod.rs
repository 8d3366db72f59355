mod array;
mod forward;
mod num;
mod option;
mod primitive;
