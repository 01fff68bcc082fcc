mod circulation;
