//! Year table for 蜀漢, 四分 throughout.

use super::RawYear::{self, Filled};

pub(crate) const START_YEAR: i32 = 221;

pub(crate) static SHU: &[RawYear] = &[
    Filled((221, 2, 10), "一月壬申 二月壬寅 三月辛未 四月辛丑 五月庚午 六月庚子 七月己巳 八月己亥 九月戊辰 十月戊戌 十一月丁卯 十二月丁酉"),
    Filled((222, 1, 30), "一月丙寅 二月丙申 三月乙丑 四月乙未 五月乙丑 六月甲午 七月甲子 閏七月癸巳 八月癸亥 九月壬辰 十月壬戌 十一月辛卯 十二月辛酉"),
    Filled((223, 2, 18), "一月庚寅 二月庚申 三月己丑 四月己未 五月戊子 六月戊午 七月丁亥 八月丁巳 九月丁亥 十月丙辰 十一月丙戌 十二月乙卯"),
    Filled((224, 2, 8), "一月乙酉 二月甲寅 三月甲申 四月癸丑 五月癸未 六月壬子 七月壬午 八月辛亥 九月辛巳 十月庚戌 十一月庚辰 十二月庚戌"),
    Filled((225, 1, 27), "一月己卯 二月己酉 三月戊寅 四月戊申 閏四月丁丑 五月丁未 六月丙子 七月丙午 八月乙亥 九月乙巳 十月甲戌 十一月甲辰 十二月癸酉"),
    Filled((226, 2, 15), "一月癸卯 二月壬申 三月壬寅 四月壬申 五月辛丑 六月辛未 七月庚子 八月庚午 九月己亥 十月己巳 十一月戊戌 十二月戊辰"),
    Filled((227, 2, 4), "一月丁酉 二月丁卯 三月丙申 四月丙寅 五月乙未 六月乙丑 七月甲午 八月甲子 九月甲午 十月癸亥 十一月癸巳 十二月壬戌"),
    Filled((228, 1, 25), "一月壬辰 閏一月辛酉 二月辛卯 三月庚申 四月庚寅 五月己未 六月己丑 七月戊午 八月戊子 九月丁巳 十月丁亥 十一月丁巳 十二月丙戌"),
    Filled((229, 2, 12), "一月丙辰 二月乙酉 三月乙卯 四月甲申 五月甲寅 六月癸未 七月癸丑 八月壬午 九月壬子 十月辛巳 十一月辛亥 十二月庚辰"),
    Filled((230, 2, 1), "一月庚戌 二月己卯 三月己酉 四月己卯 五月戊申 六月戊寅 七月丁未 八月丁丑 九月丙午 閏九月丙子 十月乙巳 十一月乙亥 十二月甲辰"),
    Filled((231, 2, 20), "一月甲戌 二月癸卯 三月癸酉 四月壬寅 五月壬申 六月壬寅 七月辛未 八月辛丑 九月庚午 十月庚子 十一月己巳 十二月己亥"),
    Filled((232, 2, 9), "一月戊辰 二月戊戌 三月丁卯 四月丁酉 五月丙寅 六月丙申 七月乙丑 八月乙未 九月甲子 十月甲午 十一月甲子 十二月癸巳"),
    Filled((233, 1, 29), "一月癸亥 二月壬辰 三月壬戌 四月辛卯 五月辛酉 六月庚寅 閏六月庚申 七月己丑 八月己未 九月戊子 十月戊午 十一月丁亥 十二月丁巳"),
    Filled((234, 2, 16), "一月丙戌 二月丙辰 三月丙戌 四月乙卯 五月乙酉 六月甲寅 七月甲申 八月癸丑 九月癸未 十月壬子 十一月壬午 十二月辛亥"),
    Filled((235, 2, 6), "一月辛巳 二月庚戌 三月庚辰 四月己酉 五月己卯 六月己酉 七月戊寅 八月戊申 九月丁丑 十月丁未 十一月丙子 十二月丙午"),
    Filled((236, 1, 26), "一月乙亥 二月乙巳 閏二月甲戌 三月甲辰 四月癸酉 五月癸卯 六月壬申 七月壬寅 八月辛未 九月辛丑 十月辛未 十一月庚子 十二月庚午"),
    Filled((237, 2, 13), "一月己亥 二月己巳 三月戊戌 四月戊辰 五月丁酉 六月丁卯 七月丙申 八月丙寅 九月乙未 十月乙丑 十一月甲午 十二月甲子"),
    Filled((238, 2, 3), "一月甲午 二月癸亥 三月癸巳 四月壬戌 五月壬辰 六月辛酉 七月辛卯 八月庚申 九月庚寅 十月己未 十一月己丑 閏十一月戊午 十二月戊子"),
    Filled((239, 2, 21), "一月丁巳 二月丁亥 三月丙辰 四月丙戌 五月丙辰 六月乙酉 七月乙卯 八月甲申 九月甲寅 十月癸未 十一月癸丑 十二月壬午"),
    Filled((240, 2, 11), "一月壬子 二月辛巳 三月辛亥 四月庚辰 五月庚戌 六月己卯 七月己酉 八月戊寅 九月戊申 十月戊寅 十一月丁未 十二月丁丑"),
    Filled((241, 1, 30), "一月丙午 二月丙子 三月乙巳 四月乙亥 五月甲辰 六月甲戌 七月癸卯 閏七月癸酉 八月壬寅 九月壬申 十月辛丑 十一月辛未 十二月辛丑"),
    Filled((242, 2, 18), "一月庚午 二月庚子 三月己巳 四月己亥 五月戊辰 六月戊戌 七月丁卯 八月丁酉 九月丙寅 十月丙申 十一月乙丑 十二月乙未"),
    Filled((243, 2, 7), "一月甲子 二月甲午 三月癸亥 四月癸巳 五月癸亥 六月壬辰 七月壬戌 八月辛卯 九月辛酉 十月庚寅 十一月庚申 十二月己丑"),
    Filled((244, 1, 28), "一月己未 二月戊子 三月戊午 四月丁亥 閏四月丁巳 五月丙戌 六月丙辰 七月丙戌 八月乙卯 九月乙酉 十月甲寅 十一月甲申 十二月癸丑"),
    Filled((245, 2, 15), "一月癸未 二月壬子 三月壬午 四月辛亥 五月辛巳 六月庚戌 七月庚辰 八月己酉 九月己卯 十月戊申 十一月戊寅 十二月戊申"),
    Filled((246, 2, 4), "一月丁丑 二月丁未 三月丙子 四月丙午 五月乙亥 六月乙巳 七月甲戌 八月甲辰 九月癸酉 十月癸卯 十一月壬申 十二月壬寅"),
    Filled((247, 1, 24), "一月辛未 閏一月辛丑 二月庚午 三月庚子 四月庚午 五月己亥 六月己巳 七月戊戌 八月戊辰 九月丁酉 十月丁卯 十一月丙申 十二月丙寅"),
    Filled((248, 2, 12), "一月乙未 二月乙丑 三月甲午 四月甲子 五月癸巳 六月癸亥 七月癸巳 八月壬戌 九月壬辰 十月辛酉 十一月辛卯 十二月庚申"),
    Filled((249, 2, 1), "一月庚寅 二月己未 三月己丑 四月戊午 五月戊子 六月丁巳 七月丁亥 八月丙辰 九月丙戌 閏九月乙卯 十月乙酉 十一月乙卯 十二月甲申"),
    Filled((250, 2, 20), "一月甲寅 二月癸未 三月癸丑 四月壬午 五月壬子 六月辛巳 七月辛亥 八月庚辰 九月庚戌 十月己卯 十一月己酉 十二月戊寅"),
    Filled((251, 2, 9), "一月戊申 二月戊寅 三月丁未 四月丁丑 五月丙午 六月丙子 七月乙巳 八月乙亥 九月甲辰 十月甲戌 十一月癸卯 十二月癸酉"),
    Filled((252, 1, 29), "一月壬寅 二月壬申 三月辛丑 四月辛未 五月庚子 六月庚午 閏六月庚子 七月己巳 八月己亥 九月戊辰 十月戊戌 十一月丁卯 十二月丁酉"),
    Filled((253, 2, 16), "一月丙寅 二月丙申 三月乙丑 四月乙未 五月甲子 六月甲午 七月癸亥 八月癸巳 九月壬戌 十月壬辰 十一月壬戌 十二月辛卯"),
    Filled((254, 2, 6), "一月辛酉 二月庚寅 三月庚申 四月己丑 五月己未 六月戊子 七月戊午 八月丁亥 九月丁巳 十月丙戌 十一月丙辰 十二月乙酉"),
    Filled((255, 1, 26), "一月乙卯 二月乙酉 閏二月甲寅 三月甲申 四月癸丑 五月癸未 六月壬子 七月壬午 八月辛亥 九月辛巳 十月庚戌 十一月庚辰 十二月己酉"),
    Filled((256, 2, 14), "一月己卯 二月戊申 三月戊寅 四月丁未 五月丁丑 六月丁未 七月丙子 八月丙午 九月乙亥 十月乙巳 十一月甲戌 十二月甲辰"),
    Filled((257, 2, 2), "一月癸酉 二月癸卯 三月壬申 四月壬寅 五月辛未 六月辛丑 七月庚午 八月庚子 九月庚午 十月己亥 十一月己巳 閏十一月戊戌 十二月戊辰"),
    Filled((258, 2, 21), "一月丁酉 二月丁卯 三月丙申 四月丙寅 五月乙未 六月乙丑 七月甲午 八月甲子 九月癸巳 十月癸亥 十一月壬辰 十二月壬戌"),
    Filled((259, 2, 11), "一月壬辰 二月辛酉 三月辛卯 四月庚申 五月庚寅 六月己未 七月己丑 八月戊午 九月戊子 十月丁巳 十一月丁亥 十二月丙辰"),
    Filled((260, 1, 31), "一月丙戌 二月乙卯 三月乙酉 四月甲寅 五月甲申 六月甲寅 七月癸未 閏七月癸丑 八月壬午 九月壬子 十月辛巳 十一月辛亥 十二月庚辰"),
    Filled((261, 2, 18), "一月庚戌 二月己卯 三月己酉 四月戊寅 五月戊申 六月丁丑 七月丁未 八月丁丑 九月丙午 十月丙子 十一月乙巳 十二月乙亥"),
    Filled((262, 2, 7), "一月甲辰 二月甲戌 三月癸卯 四月癸酉 五月壬寅 六月壬申 七月辛丑 八月辛未 九月庚子 十月庚午 十一月己亥 十二月己巳"),
    Filled((263, 1, 28), "一月己亥 二月戊辰 三月戊戌 四月丁卯 閏四月丁酉 五月丙寅 六月丙申 七月乙丑 八月乙未 九月甲子 十月甲午 十一月癸亥 十二月癸巳"),
    Filled((264, 2, 15), "一月壬戌 二月壬辰 三月壬戌 四月辛卯 五月辛酉 六月庚寅 七月庚申 八月己丑 九月己未 十月戊子 十一月戊午 十二月丁亥"),
];
