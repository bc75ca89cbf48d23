pub mod ninomiya_victoir;
