mod test_utils;
mod test_from_files;
mod test_limits;
