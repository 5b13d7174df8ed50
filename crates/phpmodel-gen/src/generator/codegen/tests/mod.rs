mod enum_files;
mod serializer_bodies;
