use stockroom_test_utils::prelude::*;
