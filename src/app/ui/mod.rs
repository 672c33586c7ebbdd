mod input;
mod panels;
