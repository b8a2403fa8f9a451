mod likes;
